//! Shared scaffolding for the command line tools in this workspace.
//!
//! Every tool is a `main` that hands its options and a body closure to
//! [`tool!`]:
//!
//! ```ignore
//! use term_macros::*;
//!
//! fn main() {
//!     tool! {
//!         args:
//!             - min_count: usize = 0;
//!             - sep: String = "\t".to_string();
//!                 ? sep.is_empty()
//!                 => "sep can't be empty"
//!         ;
//!
//!         body: || {
//!             info!("splitting on {:?}, keeping counts above {}", sep, min_count);
//!         }
//!     };
//! }
//! ```

mod cli;
mod input;
mod logger;

pub use cli::{flag_name, parse_arg, ArgSpec, Cli, CliError};
pub use input::{read_batches, read_stdin};
pub use logger::init_logger;
pub use log::{debug, error, info, trace, warn};

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::Display;

/// `text` in `style`, or plain when stderr isn't a terminal.
pub(crate) fn paint<'a, T: Display>(text: &'a T, style: Style) -> impl Display + 'a {
    text.if_supports_color(Stream::Stderr, move |t| t.style(style))
}

/// Prints `msg` as an error on stderr and exits with status 1.
pub fn fail(msg: impl Display) -> ! {
    eprintln!("{} {}", paint(&"error:", Style::new().red().bold()), msg);
    std::process::exit(1)
}

/// Declares the options of a tool, parses them from the command line and
/// runs `body`.
///
/// Each option is `- name: Type = default;` and may be followed by a check
/// `? condition => "message"` that aborts the tool when `condition` holds.
/// Options are passed as `--name value` or `--name=value`; dashes and
/// underscores in the name are interchangeable. Option types need `FromStr`
/// and `Display`, the latter for the defaults shown by `--help`.
#[macro_export]
macro_rules! tool {
    (
        args:
            $(
                - $name:ident : $ty:ty = $default:expr ;
                $( ? $cond:expr => $msg:literal )?
            )*
        ;

        body: $body:expr $(,)?
    ) => {{
        $crate::init_logger();
        let specs: &[$crate::ArgSpec] = &[
            $(
                $crate::ArgSpec {
                    name: stringify!($name),
                    ty: stringify!($ty),
                    default: || {
                        let value: $ty = $default;
                        value.to_string()
                    },
                },
            )*
        ];
        let mut cli = $crate::Cli::from_env(specs);
        $(
            let $name: $ty = match cli.take(stringify!($name)) {
                Some(raw) => $crate::parse_arg(stringify!($name), &raw)
                    .unwrap_or_else(|e| $crate::fail(e)),
                None => $default,
            };
            $(
                if $cond {
                    $crate::fail(format!("{}: {}", $crate::flag_name(stringify!($name)), $msg));
                }
            )?
        )*
        let body = $body;
        body()
    }};
}
