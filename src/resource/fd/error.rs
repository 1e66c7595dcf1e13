use std::ffi::NulError;

use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

#[derive(Debug, Display, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Error)]
#[display("a component of the provided path does not exist")]
pub struct NotFoundError;

#[derive(Debug, Display, Error)]
#[display("permission denied")]
pub struct PermissionError;

#[derive(Debug, Display, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

/// The descriptor was already closed or never valid. This is a bug in the caller, not a
/// runtime condition.
#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub struct BadFdError;

/// An OS error that isn't given its own type, carrying the raw errno.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("OS error with code: {_0}")]
pub struct OsError(#[error(not(source))] pub c_int);

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum OpenError {
    NotFound(NotFoundError),
    PermissionDenied(PermissionError),
    FileCount(FileCountError),
    InvalidPath(NulError),
    Unexpected(OsError),
}

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    BadFd(BadFdError),
    Unexpected(OsError),
}
