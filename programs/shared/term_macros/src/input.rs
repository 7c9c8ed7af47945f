use linereader::LineReader;
use std::io::{self, Read};

/// Reads `reader` to the end in line-aligned batches.
pub fn read_batches<R: Read>(reader: R) -> io::Result<Vec<u8>> {
    let mut reader = LineReader::new(reader);
    let mut data = Vec::new();
    while let Some(batch) = reader.next_batch() {
        data.extend_from_slice(batch?);
    }
    Ok(data)
}

pub fn read_stdin() -> io::Result<Vec<u8>> {
    let stdin = io::stdin();
    let lock = stdin.lock();
    read_batches(lock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn keeps_every_byte() {
        let text = "first line\nsecond\n\nno newline at the end";
        let data = read_batches(Cursor::new(text.as_bytes())).unwrap();
        assert_eq!(data, text.as_bytes());
    }

    #[test]
    fn empty_input() {
        let data = read_batches(Cursor::new(Vec::<u8>::new())).unwrap();
        assert!(data.is_empty());
    }
}
