use bitflags::bitflags;

bitflags! {
    /// The symbolic access mode used to open a [`File`](super::File).
    ///
    /// Flags compose with `|`. A mode must declare read and/or write intent, where any of
    /// [`UPDATE`](Self::UPDATE), [`TRUNCATE`](Self::TRUNCATE), [`APPEND`](Self::APPEND) or
    /// [`CREATE_NEW`](Self::CREATE_NEW) counts as writing. See [`validate`](super::validate) for
    /// the combinations that are rejected.
    ///
    /// Unless [`EXISTING_ONLY`](Self::EXISTING_ONLY) is given, any write intent creates the file
    /// when it is missing.
    ///
    /// `FileMode` is `Copy`, so the in-place setters generated for it (`insert`, `remove`, `toggle`
    /// and `set`) only ever change the caller's own copy. A mode that has been validated into an
    /// [`OpenIntent`](super::OpenIntent) can't be changed afterwards.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileMode: u8 {
        /// Open for reading.
        const READ = 1 << 0;
        /// Open for writing, leaving existing content in place.
        const UPDATE = 1 << 1;
        /// Open for writing, discarding existing content.
        const TRUNCATE = 1 << 2;
        /// Open for writing, with writes positioned at the end of the file.
        const APPEND = 1 << 3;
        /// Create the file, failing if it already exists. The check and creation are one atomic
        /// operation performed by the OS.
        const CREATE_NEW = 1 << 4;
        /// Never create the file, failing if it doesn't exist.
        const EXISTING_ONLY = 1 << 5;

        /// Every flag that implies write access.
        const ANY_WRITE = Self::UPDATE.bits()
            | Self::TRUNCATE.bits()
            | Self::APPEND.bits()
            | Self::CREATE_NEW.bits();
    }
}
