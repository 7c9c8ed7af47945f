use std::fmt::{Display, Write};
use std::str::FromStr;

/// One option as declared in [`tool!`](crate::tool), for `--help`.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub ty: &'static str,
    /// Renders the default value. Only called for `--help`.
    pub default: fn() -> String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("help requested")]
    HelpRequested,
    #[error("unknown option {0} (try --help)")]
    UnknownOption(String),
    #[error("{0} needs a value")]
    MissingValue(String),
    #[error("unexpected argument {0:?}, options look like --name value")]
    UnexpectedArgument(String),
    #[error("invalid value {value:?} for {flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

/// `min_length` -> `--min-length`
pub fn flag_name(name: &str) -> String {
    format!("--{}", name.replace('_', "-"))
}

fn normalize(name: &str) -> String {
    name.replace('-', "_")
}

pub fn parse_arg<T>(name: &str, raw: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| CliError::InvalidValue {
        flag: flag_name(name),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Options given on the command line that haven't been claimed yet.
#[derive(Debug)]
pub struct Cli {
    given: Vec<(String, String)>,
}

impl Cli {
    /// Parses `std::env::args`. Prints the usage and exits on `--help`, fails
    /// on anything that isn't a declared option.
    pub fn from_env(specs: &[ArgSpec]) -> Cli {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "tool".to_string());
        match Cli::parse(args, specs) {
            Ok(cli) => cli,
            Err(CliError::HelpRequested) => {
                print!("{}", usage(&program, specs));
                let _ = std::io::Write::flush(&mut std::io::stdout());
                std::process::exit(0)
            }
            Err(e) => crate::fail(e),
        }
    }

    /// Parses the arguments after the program name.
    pub fn parse<I>(args: I, specs: &[ArgSpec]) -> Result<Cli, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut given = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(CliError::HelpRequested);
            }
            let stripped = match arg.strip_prefix("--") {
                Some(s) if !s.is_empty() => s,
                _ => return Err(CliError::UnexpectedArgument(arg.clone())),
            };
            let (name, value) = match stripped.split_once('=') {
                Some((name, value)) => (normalize(name), value.to_string()),
                None => {
                    let name = normalize(stripped);
                    match args.next() {
                        Some(value) => (name, value),
                        None => return Err(CliError::MissingValue(flag_name(&name))),
                    }
                }
            };
            if !specs.iter().any(|spec| spec.name == name) {
                return Err(CliError::UnknownOption(flag_name(&name)));
            }
            given.push((name, value));
        }
        Ok(Cli { given })
    }

    /// Claims the value of `name`. The last occurrence wins.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let mut found = None;
        self.given.retain(|(n, v)| {
            if n == name {
                found = Some(v.clone());
                false
            } else {
                true
            }
        });
        found
    }
}

pub fn usage(program: &str, specs: &[ArgSpec]) -> String {
    let mut out = format!("usage: {} [options]\n\noptions:\n", program);
    for spec in specs {
        let _ = writeln!(
            out,
            "    {:<20} {:<12} default: {}",
            flag_name(spec.name),
            spec.ty,
            (spec.default)()
        );
    }
    let _ = writeln!(out, "    {:<20} {:<12} print this message", "--help", "");
    out
}
