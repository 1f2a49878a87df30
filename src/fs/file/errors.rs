use derive_more::{Display, Error, From, IsVariant};

use crate::fs::error::*;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ModeError {
    InvalidMode(InvalidModeError),
    ConflictingMode(ConflictingModeError),
}

/// The native open succeeded, but the result couldn't become a [`File`](super::File). The raw
/// descriptor has already been closed by the time this is returned.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum WrapError {
    IrregularFile(IrregularFileError),
    Os(OsError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum OpenError {
    InvalidMode(InvalidModeError),
    ConflictingMode(ConflictingModeError),
    InvalidPath(InvalidPathError),
    Os(OsError),
    Wrap(WrapError),
}

impl From<ModeError> for OpenError {
    fn from(value: ModeError) -> Self {
        match value {
            ModeError::InvalidMode(e) => e.into(),
            ModeError::ConflictingMode(e) => e.into(),
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    Os(OsError),
}
