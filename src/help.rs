use crate::args::Args;
use std::io::{self, Write};

/// Options that ask for the usage text instead of running the program
const HELP_OPTIONS: [&str; 3] = ["-?", "-h", "-help"];

/// Documentation for one option in a [`Usage`] listing
#[derive(Debug, Clone)]
pub struct OptionHelp {
    name: &'static str,
    value: Option<&'static str>,
    help: &'static str,
}

impl OptionHelp {
    /// Documents the option `name` (e.g. `-datadir`)
    pub fn new(name: &'static str, help: &'static str) -> Self {
        OptionHelp {
            name,
            value: None,
            help,
        }
    }

    /// Shows the option as taking a value, e.g. `-datadir=<dir>`
    pub fn with_value(mut self, placeholder: &'static str) -> Self {
        self.value = Some(placeholder);
        self
    }

    fn label(&self) -> String {
        let name = self.name.trim_start_matches('-');
        match self.value {
            Some(v) => format!("-{name}=<{v}>"),
            None => format!("-{name}"),
        }
    }
}

/// The usage text of a program
#[derive(Debug, Clone)]
pub struct Usage {
    program: &'static str,
    summary: &'static str,
    options: Vec<OptionHelp>,
}

impl Usage {
    pub fn new(program: &'static str, summary: &'static str) -> Self {
        Usage {
            program,
            summary,
            options: vec![],
        }
    }

    /// Adds an option to the listing. Options are listed in the order they are added.
    pub fn add_option(mut self, option: OptionHelp) -> Self {
        self.options.push(option);
        self
    }
}

impl Args {
    /// Whether any of `-?`, `-h` or `-help` was given
    pub fn help_requested(&self) -> bool {
        HELP_OPTIONS.iter().any(|name| self.is_set(name))
    }
}

pub fn write_help(mut w: impl Write, usage: &Usage) -> io::Result<()> {
    write!(&mut w, "{}\n\n", usage.summary)?;
    writeln!(&mut w, "Usage: {} [options]", usage.program)?;
    writeln!(&mut w)?;

    if !usage.options.is_empty() {
        writeln!(&mut w, "Options:")?;

        let labels = usage
            .options
            .iter()
            .map(OptionHelp::label)
            .collect::<Vec<_>>();

        let col_width = calculate_col_width(&labels);

        for (option, label) in usage.options.iter().zip(labels) {
            writeln!(&mut w, "  {label:col_width$}{}", option.help)?;
        }

        writeln!(&mut w)?;
    }
    w.flush()
}

fn calculate_col_width(list: &[String]) -> usize {
    list.iter().map(|s| s.len()).max().unwrap_or(0) + 5
}
