use core::fmt::Debug;

use displaydoc::Display;

use crate::types::{ClusterID, SectorID};

#[derive(Copy, Clone, Debug, Display, thiserror::Error, PartialEq)]
pub enum DataError {
    /// Short read at sector {sector}: expected {expected} bytes, got {actual}
    ShortRead { sector: SectorID, expected: usize, actual: usize },
    /// Invalid geometry: bytes per sector and sectors per cluster must be positive
    Geometry,
    /// Cluster {0} out of range
    ClusterOutOfRange(ClusterID),
    /// Cluster chain starting at {0} does not terminate
    CorruptChain(ClusterID),
    /// Cluster chain holds {actual} bytes but file size is {expected}
    TruncatedChain { expected: u32, actual: usize },
}

#[derive(Copy, Clone, Debug, Display, thiserror::Error, PartialEq)]
pub enum OperationError {
    /// No such file
    NotFound,
}

#[derive(Copy, Clone, Debug, Display, thiserror::Error, PartialEq)]
pub enum InputError {
    /// Filename must be exactly 11 bytes, space padded, got {0} bytes
    Filename(usize),
}

/// Failure classes a caller usually cares about
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Sector store failed or returned less than requested
    Read,
    NotFound,
    /// Cluster chain loops, is truncated or leaves the data region
    CorruptChain,
    /// Bad geometry or bad caller input
    Invalid,
}

#[derive(Debug, thiserror::Error)]
pub enum Error<E: Debug> {
    #[error("IO error: {0:?}")]
    IO(E),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error(transparent)]
    Input(#[from] InputError),
}

impl<E: Debug> Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IO(_) | Self::Data(DataError::ShortRead { .. }) => ErrorKind::Read,
            Self::Operation(OperationError::NotFound) => ErrorKind::NotFound,
            Self::Data(DataError::Geometry) | Self::Input(_) => ErrorKind::Invalid,
            Self::Data(_) => ErrorKind::CorruptChain,
        }
    }
}
