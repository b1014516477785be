use crate::coerce;
use crate::error::ArgError;
use crate::token::{canonical_name, negated_name, Token};
use indexmap::IndexMap;
use std::str::FromStr;

/// The options given on a command line, keyed by their canonical `-name`.
///
/// Built once by [`Args::parse_from`] and read-only afterwards. Every lookup takes the option name
/// in any of its spellings (`RCK`, `-RCK` or `--RCK`).
#[derive(Debug, Clone, Default)]
pub struct Args {
    pub(crate) program: String,
    /// Every value an option was given, in command line order
    pub(crate) options: IndexMap<String, Vec<String>>,
    /// `-X` => what the last `-noX` says about `X`
    pub(crate) negations: IndexMap<String, bool>,
    /// How many of an option's values came from the command line itself
    pub(crate) given: IndexMap<String, usize>,
    pub(crate) positionals: Vec<String>,
}

impl Args {
    /// Parses `args` as command line arguments. The input is expected to be in the same format
    /// that [args()](std::env::args) returns (i.e. the name of the executable is first)
    pub fn parse_from<I, T>(args: I) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut iter = args.into_iter().map(|s| s.into());

        let mut result = Args {
            program: iter.next().unwrap_or_default(),
            ..Args::default()
        };

        for arg in iter {
            if arg.is_empty() {
                continue;
            }

            match Token::classify(&arg) {
                Token::Option { name, value } => result.record(name, value),
                Token::Positional(p) => {
                    tracing::trace!(positional = %p, "keeping positional argument");
                    result.positionals.push(p);
                }
            }
        }

        result.given = result
            .options
            .iter()
            .map(|(name, values)| (name.clone(), values.len()))
            .collect();

        tracing::debug!(
            program = %result.program,
            options = result.options.len(),
            positionals = result.positionals.len(),
            "parsed command line"
        );
        result
    }

    /// Parses the arguments of the current process
    pub fn from_env() -> Args {
        Args::parse_from(std::env::args())
    }

    pub(crate) fn record(&mut self, name: String, value: String) {
        tracing::trace!(%name, %value, "recording option");

        if let Some(negated) = negated_name(&name) {
            self.negations
                .insert(negated, coerce::negation_result(&value));
        }

        self.options.entry(name).or_default().push(value);
    }

    /// The first argument, usually the path of the executable
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments that were not options, in order
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Canonical names of all options that were given, in the order they first appeared
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Every value given for `name`, first to last. Empty if the option was not given.
    ///
    /// Values from the command line come first, then values added by settings merges.
    pub fn values(&self, name: &str) -> &[String] {
        self.options
            .get(&canonical_name(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `name` was given in any form. A `-noX` does not count as setting `X`.
    pub fn is_set(&self, name: &str) -> bool {
        self.options.contains_key(&canonical_name(name))
    }

    /// Whether `name` is absent but switched off by its `-no` form
    pub fn is_negated(&self, name: &str) -> bool {
        !self.is_set(name) && self.negations.get(&canonical_name(name)) == Some(&false)
    }

    /// The value scalar lookups read: the last one from the command line if there is one,
    /// otherwise the last one added later
    fn last(&self, name: &str) -> Option<&str> {
        let values = self.values(name);
        let end = self
            .given
            .get(&canonical_name(name))
            .copied()
            .unwrap_or(values.len());
        values[..end].last().map(String::as_str)
    }

    /// The last value given for `name`, or `default` if it was not given.
    ///
    /// A bare `-name` yields the empty string, not `default`.
    pub fn string(&self, name: &str, default: &str) -> String {
        self.last(name).unwrap_or(default).to_string()
    }

    /// The last value given for `name` as an integer, or `default` if it was not given.
    ///
    /// Values that are not numbers, including the empty value of a bare flag, are `0`. See
    /// [`coerce::lenient_i64`].
    pub fn int(&self, name: &str, default: i64) -> i64 {
        self.last(name).map(coerce::lenient_i64).unwrap_or(default)
    }

    /// Whether `name` is switched on.
    ///
    /// If `name` was given, it is on unless its last value is `0`. If only `-noname` was given,
    /// that decides. Otherwise `default` is returned. A given `-name` always beats `-noname`, no
    /// matter which came first.
    pub fn bool(&self, name: &str, default: bool) -> bool {
        if let Some(value) = self.last(name) {
            return coerce::is_truthy(value);
        }

        self.negations
            .get(&canonical_name(name))
            .copied()
            .unwrap_or(default)
    }

    /// Parses the last value given for `name` strictly.
    ///
    /// Returns `Ok(None)` if the option was not given.
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, ArgError> {
        let Some(value) = self.last(name) else {
            return Ok(None);
        };

        value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ArgError::InvalidValue {
                name: canonical_name(name),
                value: value.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Gives `name` the value `value` unless it already has a value or a `-no` form
    pub fn with_default(mut self, name: &str, value: &str) -> Self {
        if self.is_set(name) || self.negations.contains_key(&canonical_name(name)) {
            tracing::debug!(%name, "keeping existing value");
            return self;
        }

        self.record(canonical_name(name), value.to_string());
        self
    }

    /// Boolean form of [`Args::with_default`]: sets `name` to `1` or `0`
    pub fn with_bool_default(self, name: &str, value: bool) -> Self {
        self.with_default(name, if value { "1" } else { "0" })
    }
}
