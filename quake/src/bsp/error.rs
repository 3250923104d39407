use std::{io, path::PathBuf};

use thiserror::Error;

use super::consts::{LumpType, HEADER_SIZE};

#[derive(Debug, Error)]
pub enum BspError {
    #[error("could not open file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Malformed file contents. Every variant carries enough to point at the offending bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("truncated header: {len} bytes available, {HEADER_SIZE} required")]
    TruncatedHeader { len: usize },
    #[error("unaligned lump {lump}: {len} bytes is not a multiple of the {record_size} byte record")]
    UnalignedLump {
        lump: LumpType,
        len: usize,
        record_size: usize,
    },
    #[error("truncated lump {lump}: {len} bytes at offset {offset} overrun the {file_len} byte file")]
    Truncated {
        lump: LumpType,
        offset: usize,
        len: usize,
        file_len: usize,
    },
    #[error("index {index} out of range for {table} ({len} entries)")]
    IndexOutOfRange {
        table: LumpType,
        index: i64,
        len: usize,
    },
}

impl FormatError {
    pub(crate) fn out_of_range(table: LumpType, index: impl Into<i64>, len: usize) -> Self {
        FormatError::IndexOutOfRange {
            table,
            index: index.into(),
            len,
        }
    }
}

/// Bounds-checked lookup into a decoded table.
pub(crate) fn lookup<T>(table: &[T], lump: LumpType, index: i64) -> Result<&T, FormatError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .ok_or_else(|| FormatError::out_of_range(lump, index, table.len()))
}
