use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::os::unix::ffi::OsStrExt;

use libc::{EACCES, EBADF, EDQUOT, EINTR, EIO, EMFILE, ENFILE, ENOENT, ENOSPC, EPERM, c_int};

use super::error::{
    BadFdError, CloseError, FileCountError, IOError, InterruptError, NotFoundError, OpenError,
    OsError, PermissionError, StorageExhaustedError,
};
use super::options::OpenOptions;
use super::syscall::err_no;
use crate::resource::Resource;

/// An open file descriptor.
///
/// Like every raw resource, a FileHandle doesn't close itself, see [`Resource`]. Dropping one
/// without releasing it leaks the descriptor until the process exits.
pub struct FileHandle {
    pub(crate) fd: c_int,
}

impl FileHandle {
    /// Reads up to `buf.len()` bytes, returning how many were read. Zero means end of file.
    ///
    /// # Errors
    /// Returns the raw OS error if `read(2)` fails.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, OsError> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(OsError(err_no())),
            count => Ok(count as usize),
        }
    }

    /// Writes up to `buf.len()` bytes, returning how many were written.
    ///
    /// # Errors
    /// Returns the raw OS error if `write(2)` fails.
    pub fn write(&self, buf: &[u8]) -> Result<usize, OsError> {
        // SAFETY: buf is valid for reads of buf.len() bytes.
        match unsafe { libc::write(self.fd, buf.as_ptr().cast(), buf.len()) } {
            -1 => Err(OsError(err_no())),
            count => Ok(count as usize),
        }
    }

    /// Writes the whole buffer, retrying on short writes and interrupts.
    ///
    /// # Errors
    /// Returns the raw OS error of the first failing `write(2)`.
    pub fn write_all(&self, mut buf: &[u8]) -> Result<(), OsError> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(count) => buf = &buf[count..],
                Err(OsError(EINTR)) => continue,
                Err(e) => Err(e)?,
            }
        }
        Ok(())
    }

    pub const fn raw(&self) -> c_int {
        self.fd
    }
}

impl Resource for FileHandle {
    const KIND: &'static str = "file handle";

    type Params = OpenOptions;
    type AcquireError = OpenError;
    type ReleaseError = CloseError;

    fn acquire(options: OpenOptions) -> Result<FileHandle, OpenError> {
        let pathname = CString::new(options.path.as_os_str().as_bytes())?;

        // SAFETY: pathname is a valid, NUL terminated string that outlives the call.
        match unsafe { libc::open(pathname.as_ptr(), options.flags(), options.mode as libc::c_uint) } {
            -1 => match err_no() {
                ENOENT =>          Err(NotFoundError)?,
                EACCES | EPERM =>  Err(PermissionError)?,
                EMFILE | ENFILE => Err(FileCountError)?,
                e =>               Err(OsError(e))?,
            },
            fd => Ok(FileHandle { fd }),
        }
    }

    fn release(self) -> Result<(), CloseError> {
        // Every failure is returned rather than panicked on, an Owner may be releasing mid-unwind.

        // SAFETY: close invalidates the descriptor regardless of the outcome, which is fine because
        // self is consumed.
        if unsafe { libc::close(self.fd) } == -1 {
            match err_no() {
                EBADF =>           Err(BadFdError)?,
                EINTR =>           Err(InterruptError)?,
                EIO =>             Err(IOError)?,
                ENOSPC | EDQUOT => Err(StorageExhaustedError)?,
                e =>               Err(OsError(e))?,
            }
        }
        Ok(())
    }
}

impl Debug for FileHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FileHandle({})", self.fd)
    }
}
