use crate::AnalysisError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Path that stands for standard input.
pub const STDIN: &str = "-";

/// Reads the whole input at `path` as UTF-8 text. `-` reads stdin.
pub fn read_text(path: &Path) -> Result<String, AnalysisError> {
    let bytes = if path == Path::new(STDIN) {
        term_macros::read_stdin()
    } else {
        read_file(path)
    };
    let bytes = bytes.map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, bytes)
}

// The handle is dropped on every return, including the early ones from `?`.
fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String, AnalysisError> {
    String::from_utf8(bytes).map_err(|source| AnalysisError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
