//! A parser for dash-prefixed command line options
//!
//! This crate parses command lines of the form:
//! ```text
//! noded -datadir=/srv/node --testnet -noupnp -maxconnections=8
//! ```
//! into an [`Args`] table that answers typed lookups with defaults.
//!
//! Syntax | Meaning
//! -|-
//! `-name`, `--name` | Option given with the empty value. As a boolean, it is on
//! `-name=value`, `--name=value` | Option given with `value`
//! `-noname`, `-noname=value` | Switches `name` off (or on, for `-noname=0`) when `-name` itself is absent
//! anything else | Positional argument
//!
//! # Rules
//!
//! - One and two leading dashes mean the same thing. Lookups accept either, or no dash at all.
//! - When an option is repeated, lookups use the last value. [`Args::values`] returns all of them.
//! - `-name` in any form always beats `-noname`, regardless of the order they were given in.
//! - Integer lookups never fail: a value that is not a number reads as `0`. Use [`Args::parse`]
//! to reject bad values instead.
//!
//! ```
//! use dash_args::Args;
//!
//! let args = Args::parse_from(["noded", "--testnet", "-noupnp", "-maxconnections=8"]);
//! assert!(args.bool("-testnet", false));
//! assert!(!args.bool("-upnp", true));
//! assert_eq!(args.int("-maxconnections", 125), 8);
//! assert_eq!(args.string("-datadir", "~/.noded"), "~/.noded");
//! ```

mod args;
pub mod coerce;
mod config;
mod error;
pub mod help;
mod token;

pub use args::Args;
pub use error::ArgError;
pub use help::{OptionHelp, Usage};
