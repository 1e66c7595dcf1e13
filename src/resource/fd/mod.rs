mod error;
mod file_handle;
mod options;
mod syscall;

pub use error::*;
pub use file_handle::*;
pub use options::*;
