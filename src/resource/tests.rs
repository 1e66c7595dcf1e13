#![cfg(test)]

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};

#[test]
fn test_heap_cell_use() {
    let Ok(mut cell) = HeapCell::acquire(1_i64);
    assert_eq!(cell.get(), 1);

    cell.set(42);
    assert_eq!(cell.get(), 42, "Set values should be readable.");

    assert_eq!(cell.replace(7), 42, "Replace should hand back the old value.");
    *cell.value_mut() += 1;
    assert_eq!(*cell.value(), 8);

    let Ok(()) = cell.release();
}

#[test]
fn test_heap_cell_release_drops_value() {
    let counter = CountedDrop::new(0);
    let Ok(cell) = HeapCell::acquire(counter.clone());
    assert_eq!(counter.count(), 0);

    let Ok(()) = cell.release();
    assert_eq!(counter.count(), 1, "Releasing should drop the contained value exactly once.");
}

#[test]
fn test_heap_cell_set_drops_old_value() {
    let old = CountedDrop::new(0);
    let new = CountedDrop::new(0);
    let Ok(mut cell) = HeapCell::acquire(old.clone());

    cell.set(new.clone());
    assert_eq!(old.count(), 1, "The replaced value should be dropped.");
    assert_eq!(new.count(), 0);

    let Ok(()) = cell.release();
    assert_eq!(new.count(), 1);
}

#[test]
fn test_heap_cell_leaks_without_release() {
    let counter = CountedDrop::new(0);
    {
        let Ok(_cell) = HeapCell::acquire(counter.clone());
    }
    assert_eq!(
        counter.count(),
        0,
        "A raw cell going out of scope shouldn't release anything."
    );
}

#[test]
fn test_heap_cell_zst_support() {
    let Ok(cell) = HeapCell::acquire(ZeroSizedType);
    assert_eq!(*cell.value(), ZeroSizedType);
    assert_eq!(format!("{cell:?}"), "HeapCell(ZeroSizedType)");

    let Ok(()) = cell.release();
}

#[cfg(all(feature = "fs", target_os = "linux"))]
mod file_handle {
    use std::path::PathBuf;
    use std::{env, fs, process};

    use super::*;
    use crate::scope::defer;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("scoped-resource-{}-{name}", process::id()))
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("write-then-read");
        let _cleanup = defer(|| drop(fs::remove_file(&path)));

        let options = OpenOptions::new(&path).read(false).write(true).create(true).truncate(true);
        let handle = FileHandle::acquire(options).expect("Creating a temp file should work.");
        handle.write_all(b"hello").expect("Writing should work.");
        handle.release().expect("Closing should work.");

        let handle = FileHandle::acquire(OpenOptions::new(&path)).expect("Reopening should work.");
        let mut buf = [0_u8; 16];
        let count = handle.read(&mut buf).expect("Reading should work.");
        assert_eq!(&buf[..count], b"hello", "Data should survive a release and reopen.");
        handle.release().expect("Closing should work.");
    }

    #[test]
    fn test_open_errors() {
        let missing = FileHandle::acquire(OpenOptions::new(temp_path("missing")));
        assert!(missing.is_err_and(|e| e.is_not_found()));

        let invalid = FileHandle::acquire(OpenOptions::new("/tmp/nul\0in/path"));
        assert!(invalid.is_err_and(|e| e.is_invalid_path()));
    }

    #[test]
    fn test_write_to_read_only_handle() {
        let handle = FileHandle::acquire(OpenOptions::new("/dev/null")).expect("/dev/null should open.");
        assert_eq!(
            handle.write(b"nope"),
            Err(OsError(libc::EBADF)),
            "Writing to a read-only descriptor should fail with EBADF."
        );
        handle.release().expect("Closing should work.");
    }

    #[test]
    fn test_flags() {
        let options = OpenOptions::new("/dev/null");
        assert_eq!(options.flags(), libc::O_RDONLY | libc::O_CLOEXEC);

        let options = options.append(true).create(true);
        assert_eq!(
            options.flags(),
            libc::O_RDWR | libc::O_CLOEXEC | libc::O_CREAT | libc::O_APPEND
        );

        let options = options.read(false).append(false).write(true).truncate(true);
        assert_eq!(
            options.flags(),
            libc::O_WRONLY | libc::O_CLOEXEC | libc::O_CREAT | libc::O_TRUNC
        );
    }
}
