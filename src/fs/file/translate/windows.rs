use bitflags::bitflags;

use crate::fs::file::OpenIntent;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DesiredAccess: u8 {
        /// `GENERIC_READ`
        const READ = 1 << 0;
        /// `GENERIC_WRITE`
        const WRITE = 1 << 1;
    }
}

bitflags! {
    /// Which accesses other handles to the same file may be opened with while this one is open.
    /// Arbitration is left entirely to the OS.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShareMode: u8 {
        /// `FILE_SHARE_READ`
        const READ = 1 << 0;
        /// `FILE_SHARE_WRITE`
        const WRITE = 1 << 1;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileAttributes: u8 {
        /// `FILE_ATTRIBUTE_NORMAL`
        const NORMAL = 1 << 0;
        /// `FILE_FLAG_SEQUENTIAL_SCAN`, a caching hint with no effect on behaviour.
        const SEQUENTIAL_SCAN = 1 << 1;
    }
}

/// What `CreateFileW` does depending on whether the file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreationDisposition {
    /// Create, failing if the file exists. Atomic.
    CreateNew,
    /// Create, or truncate an existing file.
    CreateAlways,
    /// Open, failing if the file is missing.
    OpenExisting,
    /// Open, or create a missing file. Existing content is preserved.
    OpenAlways,
    /// Open and truncate, failing if the file is missing.
    TruncateExisting,
}

/// The arguments for a `CreateFileW` call, plus the follow-up needed to emulate append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowsParams {
    pub access: DesiredAccess,
    pub share: ShareMode,
    pub disposition: CreationDisposition,
    pub attributes: FileAttributes,
    /// Windows has no append-on-write, so the file pointer is moved to the end once after opening.
    /// Unlike `O_APPEND`, writers sharing the file may still interleave.
    pub seek_to_end: bool,
}

impl WindowsParams {
    pub const fn from_intent(intent: &OpenIntent) -> WindowsParams {
        let mut access = DesiredAccess::empty();
        let mut share = ShareMode::empty();
        if intent.has_read() {
            access = access.union(DesiredAccess::READ);
            share = share.union(ShareMode::READ);
        }
        if intent.has_any_write() {
            access = access.union(DesiredAccess::WRITE);
            share = share.union(ShareMode::WRITE);
        }

        let read_only = intent.has_read() && !intent.has_any_write();
        let disposition = if read_only || intent.existing_only() {
            if intent.wants_truncate() {
                CreationDisposition::TruncateExisting
            } else {
                CreationDisposition::OpenExisting
            }
        } else if intent.wants_exclusive_create() {
            CreationDisposition::CreateNew
        } else if intent.wants_truncate() {
            CreationDisposition::CreateAlways
        } else {
            CreationDisposition::OpenAlways
        };

        WindowsParams {
            access,
            share,
            disposition,
            attributes: FileAttributes::NORMAL.union(FileAttributes::SEQUENTIAL_SCAN),
            seek_to_end: intent.wants_append(),
        }
    }
}

#[cfg(windows)]
mod raw {
    use windows_sys::Win32::Foundation::{GENERIC_READ, GENERIC_WRITE};
    use windows_sys::Win32::Storage::FileSystem::{
        CREATE_ALWAYS, CREATE_NEW, FILE_ATTRIBUTE_NORMAL, FILE_CREATION_DISPOSITION,
        FILE_FLAG_SEQUENTIAL_SCAN, FILE_FLAGS_AND_ATTRIBUTES, FILE_SHARE_MODE, FILE_SHARE_READ,
        FILE_SHARE_WRITE, OPEN_ALWAYS, OPEN_EXISTING, TRUNCATE_EXISTING,
    };

    use super::{CreationDisposition, DesiredAccess, FileAttributes, ShareMode, WindowsParams};

    impl WindowsParams {
        pub(crate) const fn access_mask(&self) -> u32 {
            let mut mask = 0;
            if self.access.contains(DesiredAccess::READ) {
                mask |= GENERIC_READ;
            }
            if self.access.contains(DesiredAccess::WRITE) {
                mask |= GENERIC_WRITE;
            }
            mask
        }

        pub(crate) const fn share_mode(&self) -> FILE_SHARE_MODE {
            let mut mode = 0;
            if self.share.contains(ShareMode::READ) {
                mode |= FILE_SHARE_READ;
            }
            if self.share.contains(ShareMode::WRITE) {
                mode |= FILE_SHARE_WRITE;
            }
            mode
        }

        pub(crate) const fn creation_disposition(&self) -> FILE_CREATION_DISPOSITION {
            match self.disposition {
                CreationDisposition::CreateNew => CREATE_NEW,
                CreationDisposition::CreateAlways => CREATE_ALWAYS,
                CreationDisposition::OpenExisting => OPEN_EXISTING,
                CreationDisposition::OpenAlways => OPEN_ALWAYS,
                CreationDisposition::TruncateExisting => TRUNCATE_EXISTING,
            }
        }

        pub(crate) const fn flags_and_attributes(&self) -> FILE_FLAGS_AND_ATTRIBUTES {
            let mut flags = 0;
            if self.attributes.contains(FileAttributes::NORMAL) {
                flags |= FILE_ATTRIBUTE_NORMAL;
            }
            if self.attributes.contains(FileAttributes::SEQUENTIAL_SCAN) {
                flags |= FILE_FLAG_SEQUENTIAL_SCAN;
            }
            flags
        }
    }
}
