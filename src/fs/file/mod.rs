//! Types for opening and holding files. The central types are [`FileMode`], which says how a file
//! should be opened, and [`File`], the opened file itself.
//!
//! # Opening
//! [`File::open`] takes a path and a [`FileMode`]. The mode is checked by [`validate`] and turned
//! into an [`OpenIntent`], which is then translated into native parameters for the target
//! platform ([`PosixParams`] or [`WindowsParams`]). The translations are pure functions of the
//! intent, so the same mode always produces the same parameters.
//!
//! # Creation
//! | Mode                                | File missing | File present         |
//! |-------------------------------------|--------------|----------------------|
//! | `READ`                              | error        | opened               |
//! | any write                           | created      | opened               |
//! | any write + `TRUNCATE`              | created      | truncated            |
//! | any write + `CREATE_NEW`            | created      | error                |
//! | any write + `EXISTING_ONLY`         | error        | opened (or truncated)|
//!
//! `CREATE_NEW` relies on the OS performing the existence check and creation as one step, so two
//! racing opens can never both create the file.
//!
//! # Append
//! On unix, `APPEND` maps to `O_APPEND` and every write lands at the end of the file. Windows has
//! no equivalent, so the file position is moved to the end once when the file is opened. Writers
//! sharing a file on windows may therefore interleave.

mod errors;
mod file;
mod intent;
mod mode;
mod tests;
mod translate;

pub use errors::*;
pub use file::*;
pub use intent::*;
pub use mode::*;
pub use translate::*;
