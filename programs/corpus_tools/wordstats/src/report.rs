use crate::frequency::{top_n, FrequencyTable};
use crate::{ChoiceError, Settings, Token};
use miniserde::{json, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ChoiceError {
                got: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything the report shows, computed once.
#[derive(Debug, PartialEq, Eq)]
pub struct Report<'a> {
    pub total_words: usize,
    pub unique_words: usize,
    pub top_words: Vec<(&'a Token, usize)>,
    pub min_length: usize,
    pub long_words: usize,
}

#[derive(Serialize)]
struct JsonEntry {
    word: String,
    count: usize,
}

#[derive(Serialize)]
struct JsonReport {
    total_words: usize,
    unique_words: usize,
    top_words: Vec<JsonEntry>,
    min_length: usize,
    long_words: usize,
}

impl<'a> Report<'a> {
    pub fn new(
        tokens: &[Token],
        freqs: &'a FrequencyTable,
        long_words: &[&Token],
        settings: &Settings,
    ) -> Report<'a> {
        Report {
            total_words: tokens.len(),
            unique_words: freqs.len(),
            top_words: top_n(freqs, settings.top_n, settings.tie_break),
            min_length: settings.min_length,
            long_words: long_words.len(),
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "The total number of words is: {}", self.total_words)?;
        writeln!(out, "The unique words count is: {}", self.unique_words)?;
        writeln!(out, "The most frequent words are:")?;
        for (word, count) in &self.top_words {
            writeln!(out, "'{}': {}", word, count)?;
        }
        writeln!(
            out,
            "Long words (>= {} characters): {}",
            self.min_length, self.long_words
        )
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let doc = JsonReport {
            total_words: self.total_words,
            unique_words: self.unique_words,
            top_words: self
                .top_words
                .iter()
                .map(|(word, count)| JsonEntry {
                    word: word.to_string(),
                    count: *count,
                })
                .collect(),
            min_length: self.min_length,
            long_words: self.long_words,
        };
        writeln!(out, "{}", json::to_string(&doc))
    }

    pub fn write<W: Write>(&self, format: ReportFormat, out: &mut W) -> io::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(out)?,
            ReportFormat::Json => self.write_json(out)?,
        }
        out.flush()
    }
}

/// Builds the report for an analysed text and writes it in `settings.format`.
pub fn print_report<W: Write>(
    tokens: &[Token],
    freqs: &FrequencyTable,
    long_words: &[&Token],
    settings: &Settings,
    out: &mut W,
) -> io::Result<()> {
    Report::new(tokens, freqs, long_words, settings).write(settings.format, out)
}
