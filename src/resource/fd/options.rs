use std::path::{Path, PathBuf};

use libc::c_int;

/// The parameters for acquiring a [`FileHandle`](super::FileHandle): a path and the flags to open
/// it with.
///
/// Handles are always opened with `O_CLOEXEC`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOptions {
    pub(crate) path: PathBuf,
    pub(crate) read: bool,
    pub(crate) write: bool,
    pub(crate) create: bool,
    pub(crate) truncate: bool,
    pub(crate) append: bool,
    pub(crate) mode: u32,
}

impl OpenOptions {
    /// Options for opening `path` read-only, the default.
    pub fn new<P: AsRef<Path>>(path: P) -> OpenOptions {
        OpenOptions {
            path: path.as_ref().to_owned(),
            read: true,
            write: false,
            create: false,
            truncate: false,
            append: false,
            mode: 0o644,
        }
    }

    pub const fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub const fn write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    /// Create the file if it doesn't exist, with the permissions set by [`OpenOptions::mode`].
    pub const fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    pub const fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub const fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub const fn mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) const fn flags(&self) -> c_int {
        let access = match (self.read, self.write || self.append) {
            (true, true) => libc::O_RDWR,
            (false, true) => libc::O_WRONLY,
            (_, false) => libc::O_RDONLY,
        };

        let mut flags = access | libc::O_CLOEXEC;
        if self.create {
            flags |= libc::O_CREAT;
        }
        if self.truncate {
            flags |= libc::O_TRUNC;
        }
        if self.append {
            flags |= libc::O_APPEND;
        }
        flags
    }
}
