//! Pure translations from an [`OpenIntent`](super::OpenIntent) to native open parameters.
//!
//! Both translations are compiled on every platform. Only the conversion to raw OS constants is
//! gated on the target, and only the target's translation is used when opening a file.

mod posix;
mod windows;

pub use posix::*;
pub use windows::*;

/// The native parameters for the platform this crate was compiled for.
#[cfg(unix)]
pub type NativeOpenParams = PosixParams;

#[cfg(windows)]
pub type NativeOpenParams = WindowsParams;
