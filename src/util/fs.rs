use std::io;

/// The raw error code type used by [`io::Error::raw_os_error`] (an `errno` value on unix and a
/// `GetLastError` value on windows).
pub type RawOsError = i32;

pub fn err_no() -> RawOsError {
    // raw_os_error is always Some when constructed from last_os_error.
    io::Error::last_os_error().raw_os_error().unwrap_or_default()
}
