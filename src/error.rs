use std::path::PathBuf;

/// Errors from the fallible parts of the crate: strict value parsing and loading settings files.
///
/// The plain lookups on [`Args`](crate::Args) never return these.
#[derive(Debug, thiserror::Error)]
pub enum ArgError {
    #[error("invalid value '{value}' for {name}: expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },
    #[error("line {line} of the settings is not a valid setting: '{content}'")]
    ConfigSyntax { line: usize, content: String },
    #[error("could not read settings file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
