use thiserror::Error;

/// Insert failed because every slot reachable by probing is occupied.
///
/// This is the only failure the core table can produce. It is returned to the
/// caller rather than aborting the process; the table remains usable for
/// lookups afterwards.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("probe table is full: all {capacity} slots are occupied")]
pub struct TableFull {
    /// Fixed slot count of the table that rejected the insert.
    pub capacity: usize,
}

/// Failure raised while bulk-loading records into a table.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("failed to read dictionary source: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed and the loader runs in strict mode.
    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The table ran out of slots mid-load.
    #[error(transparent)]
    Full(#[from] TableFull),
}
