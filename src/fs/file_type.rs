/// The kind of object a descriptor or handle refers to, as reported by the OS after opening it.
///
/// Opening follows symlinks, so a link is never reported as such. Anything unlisted is
/// [`FileType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    BlockDevice,
    CharDevice,
    Directory,
    Fifo,
    Regular,
    Socket,
    Other,
}

#[cfg(unix)]
use FileType::*;

impl FileType {
    #[cfg(unix)]
    #[inline(always)]
    pub(crate) const fn from_stat_mode(st_mode: libc::mode_t) -> FileType {
        match st_mode & libc::S_IFMT {
            libc::S_IFBLK => BlockDevice,
            libc::S_IFCHR => CharDevice,
            libc::S_IFDIR => Directory,
            libc::S_IFIFO => Fifo,
            libc::S_IFREG => Regular,
            libc::S_IFSOCK => Socket,
            _ => Other,
        }
    }

    /// `GetFileType` can't tell a regular file from a directory, but `CreateFileW` refuses to open
    /// directories without `FILE_FLAG_BACKUP_SEMANTICS`, so a disk handle is always a file here.
    #[cfg(windows)]
    pub(crate) const fn from_win_file_type(
        file_type: windows_sys::Win32::Storage::FileSystem::FILE_TYPE,
    ) -> FileType {
        use windows_sys::Win32::Storage::FileSystem::{
            FILE_TYPE_CHAR, FILE_TYPE_DISK, FILE_TYPE_PIPE,
        };

        match file_type {
            FILE_TYPE_DISK => FileType::Regular,
            FILE_TYPE_CHAR => FileType::CharDevice,
            FILE_TYPE_PIPE => FileType::Fifo,
            _ => FileType::Other,
        }
    }

    pub const fn is_regular(&self) -> bool {
        matches!(self, FileType::Regular)
    }
}
