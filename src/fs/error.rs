use std::fmt::{self, Display, Formatter};
use std::io::{self, ErrorKind};

use derive_more::{Display, Error};

use crate::fs::FileType;
use crate::util::fs::RawOsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("mode declares neither read nor write access")]
pub struct InvalidModeError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("mode requires the file to both exist and not exist")]
pub struct ConflictingModeError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains an interior nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("expected a regular file, found {found:?}")]
pub struct IrregularFileError {
    #[error(not(source))]
    pub found: FileType,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file has been closed")]
pub struct ClosedFileError;

/// A failure reported by the OS itself. The raw code is kept exactly as the OS returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct OsError {
    #[error(not(source))]
    code: RawOsError,
}

impl OsError {
    pub const fn from_code(code: RawOsError) -> OsError {
        OsError { code }
    }

    /// Captures the calling thread's last OS error (`errno` or `GetLastError`).
    pub(crate) fn last() -> OsError {
        OsError::from_code(crate::util::fs::err_no())
    }

    pub const fn code(&self) -> RawOsError {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        io::Error::from_raw_os_error(self.code).kind()
    }
}

impl Display for OsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", io::Error::from_raw_os_error(self.code))
    }
}

impl From<OsError> for io::Error {
    fn from(value: OsError) -> Self {
        io::Error::from_raw_os_error(value.code)
    }
}
