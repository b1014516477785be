/// What a single raw command line argument turned out to be
#[derive(Debug, PartialEq, Eq)]
pub enum Token {
    /// `-key`, `--key`, `-key=value` or `--key=value`
    Option { name: String, value: String },
    /// Anything that is not an option
    Positional(String),
}

impl Token {
    /// Classifies `raw`.
    ///
    /// One or two leading dashes mark an option. The key may not be empty and may not start with
    /// a third dash, so `-`, `--`, `-=x` and `---x` are positionals.
    pub fn classify(raw: &str) -> Token {
        let Some(body) = strip_dashes(raw) else {
            return Token::Positional(raw.to_string());
        };

        // The value is everything after the first `=`
        // e.g. -rpcuser=alice=bob
        //       ^^^^^^^ ^^^^^^^^^
        //         key    value
        let (key, value) = body.split_once('=').unwrap_or((body, ""));

        if key.is_empty() || key.starts_with('-') {
            return Token::Positional(raw.to_string());
        }

        Token::Option {
            name: format!("-{key}"),
            value: value.to_string(),
        }
    }
}

/// Returns the canonical form of a lookup name: `RCK`, `-RCK` and `--RCK` all become `-RCK`
pub fn canonical_name(name: &str) -> String {
    let key = strip_dashes(name).unwrap_or(name);
    format!("-{key}")
}

/// If `name` is the negation form `-noX`, returns the canonical name `-X` it negates
pub fn negated_name(name: &str) -> Option<String> {
    let rest = name.strip_prefix("-no")?;
    if rest.is_empty() || rest.starts_with('-') {
        return None;
    }
    Some(format!("-{rest}"))
}

fn strip_dashes(arg: &str) -> Option<&str> {
    arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))
}
