use std::io::BufRead;

use log::warn;

use crate::error::LoadError;
use crate::hasher::KeyHash;
use crate::stats::LoadReport;
use crate::table::ProbeMap;

/// Bulk-loads `"key: value"` records from a line-oriented text source into a
/// [`ProbeMap`].
///
/// The loader owns parsing configuration: the separator between key and
/// value, and whether a malformed record aborts the load or is skipped.
/// Whitespace around both key and value is trimmed. A record is malformed
/// when the separator is missing or the trimmed key is empty; such records
/// never reach the table and therefore never move any of its counters.
///
/// ```
/// use probemap::{DictLoader, ProbeMap};
///
/// # fn main() -> Result<(), probemap::LoadError> {
/// let source = "ferrous: containing iron\noxide: a compound of oxygen\n";
/// let mut map = ProbeMap::new(1115);
/// let report = DictLoader::default().load(&mut map, source.as_bytes())?;
/// assert_eq!(report.loaded, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DictLoader {
    separator: char,
    strict: bool,
}

impl Default for DictLoader {
    fn default() -> Self {
        Self {
            separator: ':',
            strict: false,
        }
    }
}

impl DictLoader {
    /// Overrides the character separating keys from values. Only the first
    /// occurrence per line splits; later occurrences belong to the value.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Makes malformed records abort the load with
    /// [`LoadError::Malformed`] instead of being skipped.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reads `source` line by line and inserts every well-formed record.
    ///
    /// Malformed records are logged and counted in the returned
    /// [`LoadReport`] (or abort the load in strict mode). Insertion order
    /// follows source order, so the table's collision and probe statistics
    /// describe exactly this data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails, if the table runs out of slots,
    /// or, in strict mode, on the first malformed record.
    pub fn load<H, R>(&self, map: &mut ProbeMap<H>, source: R) -> Result<LoadReport, LoadError>
    where
        H: KeyHash,
        R: BufRead,
    {
        let mut report = LoadReport::default();
        for (number, line) in source.lines().enumerate() {
            let line = line?;
            match split_record(&line, self.separator) {
                Some((key, value)) => {
                    map.insert(key, value)?;
                    report.loaded += 1;
                }
                None => {
                    if self.strict {
                        return Err(LoadError::Malformed {
                            line: number + 1,
                            reason: malformed_reason(&line, self.separator).to_string(),
                        });
                    }
                    warn!(
                        "skipping malformed record at line {}: {}",
                        number + 1,
                        malformed_reason(&line, self.separator)
                    );
                    report.skipped += 1;
                }
            }
        }
        Ok(report)
    }
}

/// Splits a line into a trimmed key and value, or `None` when the line is
/// malformed.
fn split_record(line: &str, separator: char) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(separator)?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

fn malformed_reason(line: &str, separator: char) -> &'static str {
    if line.contains(separator) {
        "empty key"
    } else {
        "missing separator"
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::{BufReader, Write};

    use crate::*;

    #[test]
    fn test_basic_load() {
        let source = "apple: a round fruit\nbanana: a long yellow fruit\n";
        let mut map = ProbeMap::new(1115);
        let report = DictLoader::default().load(&mut map, source.as_bytes()).unwrap();

        assert_eq!(report, LoadReport { loaded: 2, skipped: 0 });
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("apple"), Some("a round fruit"));
        assert_eq!(map.get("banana"), Some("a long yellow fruit"));
    }

    #[test]
    fn test_trims_whitespace() {
        let source = "  spaced  :   lots of padding here \n\ttabbed\t:\tvalue\t\n";
        let mut map = ProbeMap::new(1115);
        DictLoader::default().load(&mut map, source.as_bytes()).unwrap();

        assert_eq!(map.get("spaced"), Some("lots of padding here"));
        assert_eq!(map.get("tabbed"), Some("value"));
    }

    #[test]
    fn test_value_keeps_later_separators() {
        let source = "ratio: 3:2\n";
        let mut map = ProbeMap::new(1115);
        DictLoader::default().load(&mut map, source.as_bytes()).unwrap();
        assert_eq!(map.get("ratio"), Some("3:2"));
    }

    #[test]
    fn test_skips_malformed_records() {
        let source = "no separator on this line\n: empty key\n\nok: fine\n";
        let mut map = ProbeMap::new(1115);
        let report = DictLoader::default().load(&mut map, source.as_bytes()).unwrap();

        assert_eq!(report, LoadReport { loaded: 1, skipped: 3 });
        assert_eq!(map.get("ok"), Some("fine"));

        // Skipped records must not leak into the table's counters.
        let stats = map.stats();
        assert_eq!(stats.elements, 1);
        assert_eq!(stats.collisions, 0);
        assert_eq!(stats.total_probes, 0);
    }

    #[test]
    fn test_strict_mode() {
        let source = "ok: fine\nbroken line\n";
        let mut map = ProbeMap::new(1115);
        let err = DictLoader::default()
            .with_strict(true)
            .load(&mut map, source.as_bytes())
            .unwrap_err();

        match err {
            LoadError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "missing separator");
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
        // The record before the malformed one was already inserted.
        assert_eq!(map.get("ok"), Some("fine"));
    }

    #[test]
    fn test_custom_separator() {
        let source = "alpha = first letter\nbeta = second letter\n";
        let mut map = ProbeMap::new(1115);
        let report = DictLoader::default()
            .with_separator('=')
            .load(&mut map, source.as_bytes())
            .unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(map.get("alpha"), Some("first letter"));
    }

    #[test]
    fn test_table_full_propagates() {
        let source = "one: 1\ntwo: 2\n";
        let mut map = ProbeMap::new(1);
        let err = DictLoader::default()
            .load(&mut map, source.as_bytes())
            .unwrap_err();

        match err {
            LoadError::Full(full) => assert_eq!(full, TableFull { capacity: 1 }),
            other => panic!("expected table-full error, got {other:?}"),
        }
        assert_eq!(map.get("one"), Some("1"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "serendipity: finding something good without looking for it").unwrap();
        writeln!(file, "petrichor: the smell of earth after rain").unwrap();
        drop(file);

        let mut map = ProbeMap::new(1115);
        let reader = BufReader::new(File::open(&path).unwrap());
        let report = DictLoader::default().load(&mut map, reader).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(
            map.get("petrichor"),
            Some("the smell of earth after rain")
        );
    }
}
