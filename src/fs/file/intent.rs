use super::{FileMode, ModeError};
use crate::fs::{ConflictingModeError, InvalidModeError};

/// Checks that `mode` is a usable combination of flags, without touching the file system.
///
/// The rules are checked in order and the first failure is returned:
/// 1. [`InvalidMode`](ModeError::InvalidMode) if neither [`READ`](FileMode::READ) nor any write
///    flag is present.
/// 2. [`ConflictingMode`](ModeError::ConflictingMode) if both [`CREATE_NEW`](FileMode::CREATE_NEW)
///    and [`EXISTING_ONLY`](FileMode::EXISTING_ONLY) are present.
///
/// Every other combination is accepted, even where some flags are redundant.
pub const fn validate(mode: FileMode) -> Result<(), ModeError> {
    if !mode.contains(FileMode::READ) && !mode.intersects(FileMode::ANY_WRITE) {
        return Err(ModeError::InvalidMode(InvalidModeError));
    }
    if mode.contains(FileMode::CREATE_NEW) && mode.contains(FileMode::EXISTING_ONLY) {
        return Err(ModeError::ConflictingMode(ConflictingModeError));
    }
    Ok(())
}

/// A [`FileMode`] that has passed [`validate`], along with the predicates that the platform
/// translations are written in terms of.
///
/// The only way to get an `OpenIntent` is through [`OpenIntent::new`], so holding one is proof
/// that the mode is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenIntent {
    mode: FileMode,
}

impl OpenIntent {
    pub const fn new(mode: FileMode) -> Result<OpenIntent, ModeError> {
        match validate(mode) {
            Ok(()) => Ok(OpenIntent { mode }),
            Err(e) => Err(e),
        }
    }

    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    pub const fn has_read(&self) -> bool {
        self.mode.contains(FileMode::READ)
    }

    pub const fn has_any_write(&self) -> bool {
        self.mode.intersects(FileMode::ANY_WRITE)
    }

    pub const fn wants_create(&self) -> bool {
        self.has_any_write() && !self.mode.contains(FileMode::EXISTING_ONLY)
    }

    pub const fn wants_exclusive_create(&self) -> bool {
        self.mode.contains(FileMode::CREATE_NEW)
    }

    pub const fn wants_truncate(&self) -> bool {
        self.mode.contains(FileMode::TRUNCATE)
    }

    pub const fn wants_append(&self) -> bool {
        self.mode.contains(FileMode::APPEND)
    }

    pub const fn existing_only(&self) -> bool {
        self.mode.contains(FileMode::EXISTING_ONLY)
    }
}
