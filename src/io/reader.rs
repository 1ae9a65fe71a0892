/*! Sentence corpus reader.

Reads tab-separated lines and extracts the sentence column.
Lines without that column, or that are not valid UTF-8, are reported as [Line::Malformed]
so that the caller decides what to do with them. Empty lines are skipped.
!*/
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ByteRecord;
use log::warn;

use crate::error::Error;

/// Column holding the sentence in the translation corpus (the first one is an identifier).
pub const DEFAULT_COLUMN: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Trimmed sentence.
    Sentence(String),
    /// Skipped line, with its (1-based) line number.
    Malformed(u64),
}

pub struct CorpusReader<R: Read> {
    inner: csv::Reader<R>,
    column: usize,
    record: ByteRecord,
}

impl CorpusReader<File> {
    pub fn from_path(path: &Path, column: usize) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(file, column))
    }
}

impl<R: Read> CorpusReader<R> {
    pub fn new(reader: R, column: usize) -> Self {
        let inner = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        Self {
            inner,
            column,
            record: ByteRecord::new(),
        }
    }

    fn current(&self) -> Option<Line> {
        let line_nb = self.record.position().map_or(0, |p| p.line());

        // whitespace-only lines count as empty
        if self.record.iter().all(|field| field.iter().all(u8::is_ascii_whitespace)) {
            return None;
        }

        let line = match self.record.get(self.column).map(std::str::from_utf8) {
            Some(Ok(sentence)) => Line::Sentence(sentence.trim().to_string()),
            Some(Err(e)) => {
                warn!("line {line_nb}: invalid utf-8 ({e}), skipping");
                Line::Malformed(line_nb)
            }
            None => {
                warn!(
                    "line {line_nb}: no column {} ({} found), skipping",
                    self.column,
                    self.record.len()
                );
                Line::Malformed(line_nb)
            }
        };
        Some(line)
    }
}

impl<R: Read> Iterator for CorpusReader<R> {
    type Item = Result<Line, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.read_byte_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    if let Some(line) = self.current() {
                        return Some(Ok(line));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(content: &str, column: usize) -> Vec<Line> {
        CorpusReader::new(content.as_bytes(), column)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn sentences() {
        let content = "1\tHei på deg.\tHei på deg.\n2\t  Hvordan går det?  \tKorleis går det?\n";
        assert_eq!(
            read(content, DEFAULT_COLUMN),
            vec![
                Line::Sentence("Hei på deg.".to_string()),
                Line::Sentence("Hvordan går det?".to_string()),
            ]
        );
        assert_eq!(
            read(content, 2),
            vec![
                Line::Sentence("Hei på deg.".to_string()),
                Line::Sentence("Korleis går det?".to_string()),
            ]
        );
    }

    #[test]
    fn empty_lines() {
        let content = "\n1\tEn.\n\n   \n2\tTo.\n";
        assert_eq!(
            read(content, 1),
            vec![
                Line::Sentence("En.".to_string()),
                Line::Sentence("To.".to_string()),
            ]
        );
    }

    #[test]
    fn missing_column() {
        let content = "1\tEn.\nbare en kolonne\n3\tTre.\n";
        assert_eq!(
            read(content, 1),
            vec![
                Line::Sentence("En.".to_string()),
                Line::Malformed(2),
                Line::Sentence("Tre.".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_utf8() {
        let mut content = b"1\tEn.\n2\t".to_vec();
        content.extend_from_slice(&[0xff, 0xfe, b'.', b'\n']);
        content.extend_from_slice("3\tTre.\n".as_bytes());
        let lines: Vec<Line> = CorpusReader::new(content.as_slice(), 1)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines[1], Line::Malformed(2));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn quotes_are_literal() {
        let content = "1\t\"Hei\", sa hun.\n";
        assert_eq!(
            read(content, 1),
            vec![Line::Sentence("\"Hei\", sa hun.".to_string())]
        );
    }
}
