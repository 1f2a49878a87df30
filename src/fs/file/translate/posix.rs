use bitflags::bitflags;

use crate::fs::file::OpenIntent;

/// Permission bits given to files created by an open: read-write for owner, group and others,
/// before the process umask is applied.
pub const DEFAULT_CREATE_MODE: u32 = 0o666;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosixAccess {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PosixFlags: u8 {
        /// `O_CREAT`
        const CREATE = 1 << 0;
        /// `O_TRUNC`
        const TRUNCATE = 1 << 1;
        /// `O_APPEND`. Every write is atomically positioned at the end of file by the kernel,
        /// regardless of any seek in between.
        const APPEND = 1 << 2;
        /// `O_EXCL`. Only meaningful alongside `CREATE`, where the existence check and creation
        /// become one atomic step.
        const EXCLUSIVE_CREATE = 1 << 3;
    }
}

/// The arguments for a POSIX `open(2)` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PosixParams {
    pub access: PosixAccess,
    pub flags: PosixFlags,
    /// Only present when [`PosixFlags::CREATE`] is set, the OS ignores it otherwise.
    pub create_mode: Option<u32>,
}

impl PosixParams {
    pub const fn from_intent(intent: &OpenIntent) -> PosixParams {
        let access = match (intent.has_read(), intent.has_any_write()) {
            (true, true) => PosixAccess::ReadWrite,
            (false, true) => PosixAccess::WriteOnly,
            // A valid intent always reads or writes.
            (_, false) => PosixAccess::ReadOnly,
        };

        let mut flags = PosixFlags::empty();
        if intent.wants_create() {
            flags = flags.union(PosixFlags::CREATE);
        }
        if intent.wants_truncate() {
            flags = flags.union(PosixFlags::TRUNCATE);
        }
        if intent.wants_append() {
            flags = flags.union(PosixFlags::APPEND);
        }
        if intent.wants_exclusive_create() {
            flags = flags.union(PosixFlags::EXCLUSIVE_CREATE);
        }

        PosixParams {
            access,
            flags,
            create_mode: if flags.contains(PosixFlags::CREATE) {
                Some(DEFAULT_CREATE_MODE)
            } else {
                None
            },
        }
    }
}

#[cfg(unix)]
mod raw {
    use libc::{
        O_APPEND, O_CLOEXEC, O_CREAT, O_EXCL, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY, c_int, c_uint,
    };

    use super::{PosixAccess, PosixFlags, PosixParams};

    impl PosixAccess {
        pub(crate) const fn oflag(&self) -> c_int {
            match self {
                PosixAccess::ReadOnly => O_RDONLY,
                PosixAccess::WriteOnly => O_WRONLY,
                PosixAccess::ReadWrite => O_RDWR,
            }
        }
    }

    impl PosixFlags {
        pub(crate) const fn oflag(&self) -> c_int {
            let mut oflag = 0;
            if self.contains(PosixFlags::CREATE) {
                oflag |= O_CREAT;
            }
            if self.contains(PosixFlags::TRUNCATE) {
                oflag |= O_TRUNC;
            }
            if self.contains(PosixFlags::APPEND) {
                oflag |= O_APPEND;
            }
            if self.contains(PosixFlags::EXCLUSIVE_CREATE) {
                oflag |= O_EXCL;
            }
            oflag
        }
    }

    impl PosixParams {
        /// The complete `oflag` argument. Descriptors are always close-on-exec, so they aren't
        /// inherited by child processes.
        pub(crate) const fn oflag(&self) -> c_int {
            self.access.oflag() | self.flags.oflag() | O_CLOEXEC
        }

        /// The variadic `mode` argument, promoted to `c_uint` as C would.
        pub(crate) const fn mode_arg(&self) -> c_uint {
            match self.create_mode {
                Some(mode) => mode as c_uint,
                None => 0,
            }
        }
    }
}
