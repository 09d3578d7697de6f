use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use fat12::error::{Error, ErrorKind, InputError};

type FsError = Error<io::Error>;

/// Missing or malformed command line arguments
pub const USAGE_EXIT_CODE: i32 = 64;

/// Everything that makes the tool exit non-zero, one variant per stage
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    #[error("Cannot open image {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Cannot read boot sector: {0}")]
    BootSector(FsError),
    #[error("Cannot read FAT: {0}")]
    FAT(FsError),
    #[error("Cannot read root directory: {0}")]
    RootDirectory(FsError),
    #[error("File {0:?} not found")]
    NotFound(OsString),
    #[error("Malformed file name {0:?}: {1}")]
    Name(OsString, InputError),
    #[error("Cannot read file: {0}")]
    Read(FsError),
    #[error("Corrupt cluster chain: {0}")]
    CorruptChain(FsError),
    #[error("Cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl Failure {
    /// Classify an error raised while reading file content
    pub fn file(error: FsError) -> Self {
        match error.kind() {
            ErrorKind::CorruptChain => Self::CorruptChain(error),
            _ => Self::Read(error),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Open { .. } => 1,
            Self::BootSector(_) => 2,
            Self::FAT(_) => 3,
            Self::RootDirectory(_) => 4,
            Self::NotFound(_) | Self::Name(..) => 5,
            Self::Read(_) | Self::Output(_) => 6,
            Self::CorruptChain(_) => 7,
        }
    }
}
