//! Word statistics for a single text: how many words, how many distinct ones,
//! which are the most frequent and how many are long.
//!
//! ```no_run
//! use wordstats::{analyze_file, Settings};
//!
//! let stdout = std::io::stdout();
//! analyze_file("sample.txt".as_ref(), &Settings::default(), &mut stdout.lock())?;
//! # Ok::<(), wordstats::AnalysisError>(())
//! ```

mod error;
pub mod frequency;
pub mod loader;
pub mod report;
mod tokenizer;

pub use error::{AnalysisError, ChoiceError};
pub use frequency::{count_words, find_long_words, top_n, FrequencyTable, TieBreak};
pub use loader::read_text;
pub use report::{print_report, Report, ReportFormat};
pub use tokenizer::{tokenize, Token};

use log::{debug, info};
use std::io::Write;
use std::path::Path;

pub const DEFAULT_MIN_LENGTH: usize = 4;
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Words with at least this many characters count as long.
    pub min_length: usize,
    pub top_n: usize,
    pub tie_break: TieBreak,
    pub format: ReportFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_length: DEFAULT_MIN_LENGTH,
            top_n: DEFAULT_TOP_N,
            tie_break: TieBreak::default(),
            format: ReportFormat::default(),
        }
    }
}

/// Tokenizes `text`, counts it and writes the report to `out`.
pub fn analyze_text<W: Write>(text: &str, settings: &Settings, out: &mut W) -> Result<(), AnalysisError> {
    let tokens = tokenize(text);
    debug!("{} tokens", tokens.len());
    let freqs = count_words(&tokens);
    debug!("{} distinct tokens", freqs.len());
    let long_words = find_long_words(&tokens, settings.min_length);
    debug!("{} tokens with >= {} characters", long_words.len(), settings.min_length);
    print_report(&tokens, &freqs, &long_words, settings, out).map_err(AnalysisError::Write)
}

/// Reads `path` (`-` for stdin) and writes its report to `out`.
pub fn analyze_file<W: Write>(path: &Path, settings: &Settings, out: &mut W) -> Result<(), AnalysisError> {
    let text = read_text(path)?;
    info!("read {} bytes from {}", text.len(), path.display());
    analyze_text(&text, settings, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let err = analyze_text("the cat sat", &Settings::default(), &mut ClosedPipe).unwrap_err();
        match &err {
            AnalysisError::Write(source) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected a write error, got {:?}", other),
        }
        assert!(err.to_string().starts_with("couldn't write the report"));
    }

    #[test]
    fn json_write_failure_is_reported() {
        let settings = Settings {
            format: ReportFormat::Json,
            ..Settings::default()
        };
        let err = analyze_text("", &settings, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, AnalysisError::Write(_)), "{:?}", err);
    }
}
