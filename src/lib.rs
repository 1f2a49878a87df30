//! This crate opens files from a small, closed set of symbolic access-mode flags rather than ad-hoc
//! mode strings or hand-assembled native flag words.
//!
//! # Purpose
//! Every platform has its own vocabulary for opening a file. POSIX wants an access mode, some
//! `O_*` flags and a permission mode, while Windows wants a desired-access mask, a share mode and
//! a creation disposition. [`FileMode`](fs::file::FileMode) describes what the caller wants in
//! platform-neutral terms, and this crate works out how to ask the OS for it.
//!
//! # Method
//! Opening happens as a one-way pipeline:
//! 1. The [`FileMode`](fs::file::FileMode) is validated into an
//!    [`OpenIntent`](fs::file::OpenIntent), rejecting combinations that are empty or contradict
//!    themselves before any syscall is made.
//! 2. The intent is translated into [`PosixParams`](fs::file::PosixParams) or
//!    [`WindowsParams`](fs::file::WindowsParams). Both translations are pure and always compiled,
//!    but only the one for the target platform is ever handed to the OS.
//! 3. The native open is performed, and the raw descriptor (or handle) is wrapped into a
//!    [`File`](fs::file::File). If wrapping fails, the raw descriptor is closed before the error is
//!    returned, so no call leaks a descriptor.
//!
//! Atomic creation is always delegated to the OS (`O_EXCL` or `CREATE_NEW`), this crate never
//! checks for a file's existence before creating it.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). OS failures are never reinterpreted,
//! the raw error code is passed through in an [`OsError`](fs::OsError).
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` (unix) and `windows-sys` (windows) for its thin syscall
//! wrappers, `bitflags` for the flag sets and `tracing` for diagnostics. Like most of the errors,
//! a few traits are derived with `derive_more` to avoid very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_inception)]

pub mod fs;

pub(crate) mod util;
