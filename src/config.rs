use crate::args::Args;
use crate::error::ArgError;
use crate::token::{canonical_name, negated_name};
use std::collections::HashSet;
use std::path::Path;

/// One `key=value` line of a settings file
#[derive(Debug, PartialEq, Eq)]
struct Setting {
    name: String,
    value: String,
}

/// The option a setting is about: `-X` for both `-X` and `-noX`
fn subject(name: &str) -> String {
    negated_name(name).unwrap_or_else(|| name.to_string())
}

fn parse_settings(text: &str) -> Result<Vec<Setting>, ArgError> {
    let mut settings = vec![];

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Section headers are accepted but carry no meaning
        if line.starts_with('[') && line.ends_with(']') {
            continue;
        }

        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        let key = key.trim();

        if key.is_empty() {
            return Err(ArgError::ConfigSyntax {
                line: idx + 1,
                content: line.to_string(),
            });
        }

        settings.push(Setting {
            name: canonical_name(key),
            value: value.trim().to_string(),
        });
    }

    Ok(settings)
}

impl Args {
    /// Merges settings text underneath the command line.
    ///
    /// Each non-comment line is `key=value` or a bare `key`, spelled without the leading dash.
    /// Settings are added as if they had been passed after the command line, so `nokey` lines
    /// negate and a later merge overrides an earlier one. Options given on the command line keep
    /// answering lookups with their command line value: settings for them only add to
    /// [`Args::values`], and settings for the opposite `no` form are ignored.
    pub fn merge_config_str(mut self, text: &str) -> Result<Self, ArgError> {
        let settings = parse_settings(text)?;
        let from_cmdline: HashSet<String> = self.given.keys().map(|n| subject(n)).collect();

        for Setting { name, value } in settings {
            if self.given.contains_key(&name) {
                tracing::debug!(%name, "setting adds a value behind the command line");
                self.options.entry(name).or_default().push(value);
                continue;
            }
            if from_cmdline.contains(&subject(&name)) {
                tracing::debug!(%name, "setting is overridden by the command line");
                continue;
            }
            self.record(name, value);
        }

        Ok(self)
    }

    /// Reads the settings file at `path` and merges it with [`Args::merge_config_str`]
    pub fn merge_config_file(self, path: impl AsRef<Path>) -> Result<Self, ArgError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ArgError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "merging settings file");
        self.merge_config_str(&text)
    }
}
