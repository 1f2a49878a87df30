//! The owning wrapper for raw descriptors (unix) and handles (windows), and the syscalls made on
//! them. Exactly one implementation is compiled, chosen by the target platform.
//!
//! An [`Fd`] closes what it owns when dropped, so a descriptor returned by a native open is
//! released on every path until it is handed over to a [`std::fs::File`] with `Fd::into_std`.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::*;

#[cfg(not(any(unix, windows)))]
compile_error!("fsmode only supports unix and windows targets");
