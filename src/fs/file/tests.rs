#![cfg(test)]

use std::io::{BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Barrier};
use std::thread;

use tempfile::TempDir;

use super::*;

fn read_line(file: &mut File) -> String {
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).unwrap();
    line
}

fn os_error_kind(result: Result<File, OpenError>) -> ErrorKind {
    match result {
        Err(OpenError::Os(e)) => e.kind(),
        other => panic!("expected an OS error, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_missing_access() {
    assert_eq!(
        validate(FileMode::empty()),
        Err(ModeError::InvalidMode(crate::fs::InvalidModeError))
    );
    assert!(
        validate(FileMode::EXISTING_ONLY).unwrap_err().is_invalid_mode(),
        "EXISTING_ONLY alone declares no access."
    );
}

#[test]
fn test_validate_rejects_conflicts() {
    assert!(
        validate(FileMode::CREATE_NEW | FileMode::EXISTING_ONLY)
            .unwrap_err()
            .is_conflicting_mode()
    );
    let mode = FileMode::READ | FileMode::UPDATE | FileMode::CREATE_NEW | FileMode::EXISTING_ONLY;
    assert!(validate(mode).unwrap_err().is_conflicting_mode());
}

#[test]
fn test_validate_all_modes() {
    for bits in 0..=FileMode::all().bits() {
        let Some(mode) = FileMode::from_bits(bits) else { continue };
        let has_access = mode.intersects(FileMode::READ | FileMode::ANY_WRITE);
        let conflicts = mode.contains(FileMode::CREATE_NEW | FileMode::EXISTING_ONLY);

        match validate(mode) {
            Err(ModeError::InvalidMode(_)) => assert!(!has_access, "{mode:?} declares access."),
            Err(ModeError::ConflictingMode(_)) => assert!(
                has_access && conflicts,
                "{mode:?} should only conflict when access is declared."
            ),
            Ok(()) => assert!(has_access && !conflicts, "{mode:?} should have been rejected."),
        }
        assert_eq!(
            validate(mode).is_ok(),
            OpenIntent::new(mode).is_ok(),
            "OpenIntent should accept exactly the valid modes."
        );
    }
}

#[test]
fn test_intent_predicates() {
    let intent = OpenIntent::new(FileMode::READ).unwrap();
    assert!(intent.has_read());
    assert!(!intent.has_any_write());
    assert!(!intent.wants_create(), "Read-only opens never create.");

    let intent = OpenIntent::new(FileMode::APPEND | FileMode::EXISTING_ONLY).unwrap();
    assert!(intent.has_any_write());
    assert!(intent.wants_append());
    assert!(!intent.wants_create());

    let mode = FileMode::READ | FileMode::TRUNCATE | FileMode::CREATE_NEW;
    let intent = OpenIntent::new(mode).unwrap();
    assert!(intent.has_read() && intent.has_any_write());
    assert!(intent.wants_create());
    assert!(intent.wants_exclusive_create());
    assert!(intent.wants_truncate());
    assert_eq!(intent.mode(), mode);
}

#[test]
fn test_intent_keeps_its_mode() {
    let mut mode = FileMode::READ | FileMode::UPDATE;
    let intent = OpenIntent::new(mode).unwrap();

    mode.insert(FileMode::EXISTING_ONLY);
    mode.remove(FileMode::UPDATE);
    assert_eq!(mode, FileMode::READ | FileMode::EXISTING_ONLY);
    assert_eq!(
        intent.mode(),
        FileMode::READ | FileMode::UPDATE,
        "Changing the caller's mode shouldn't affect a validated intent."
    );
    assert!(intent.wants_create());
}

#[test]
fn test_invalid_mode_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never");

    assert!(File::open(&path, FileMode::EXISTING_ONLY).unwrap_err().is_invalid_mode());
    assert!(
        File::open(&path, FileMode::UPDATE | FileMode::CREATE_NEW | FileMode::EXISTING_ONLY)
            .unwrap_err()
            .is_conflicting_mode()
    );
    assert!(!path.exists(), "Rejected modes shouldn't create anything.");
}

#[test]
fn test_open_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing");

    assert_eq!(os_error_kind(File::open(&path, FileMode::READ)), ErrorKind::NotFound);
    assert_eq!(
        os_error_kind(File::open(&path, FileMode::UPDATE | FileMode::EXISTING_ONLY)),
        ErrorKind::NotFound
    );
    assert!(!path.exists());

    let file = File::open(&path, FileMode::UPDATE).unwrap();
    assert!(file.is_open());
    assert_eq!(
        std::fs::metadata(&path).unwrap().len(),
        0,
        "UPDATE should create an empty file."
    );
}

#[test]
fn test_create_new_twice() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("once");

    File::open(&path, FileMode::UPDATE | FileMode::CREATE_NEW).unwrap();
    assert!(path.exists());
    assert_eq!(
        os_error_kind(File::open(&path, FileMode::UPDATE | FileMode::CREATE_NEW)),
        ErrorKind::AlreadyExists
    );
}

#[test]
fn test_create_new_race() {
    const THREADS: usize = 8;

    let dir = TempDir::new().unwrap();
    let path = Arc::new(dir.path().join("contested"));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let path = Arc::clone(&path);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                File::open(&*path, FileMode::UPDATE | FileMode::CREATE_NEW)
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.join().unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert_eq!(os_error_kind(Err(e)), ErrorKind::AlreadyExists),
        }
    }
    assert_eq!(created, 1, "Exactly one racing CREATE_NEW should succeed.");
}

#[test]
fn test_update_preserves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preserved");
    std::fs::write(&path, "old content").unwrap();

    let mut file = File::open(&path, FileMode::UPDATE).unwrap();
    file.write_all(b"new").unwrap();
    file.close().unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "new content",
        "UPDATE should preserve existing content."
    );
}

#[test]
fn test_truncate_discards() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("truncated");
    std::fs::write(&path, "old content").unwrap();

    let mode = FileMode::READ | FileMode::TRUNCATE | FileMode::EXISTING_ONLY;
    let mut file = File::open(&path, mode).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    assert_eq!(content, "", "TRUNCATE should discard existing content.");
}

#[test]
fn test_reopen_append() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello");

    let mode = FileMode::READ | FileMode::TRUNCATE | FileMode::CREATE_NEW;
    let mut file = File::open(&path, mode).unwrap();
    file.write_all(b"Hello").unwrap();
    file.rewind().unwrap();
    assert_eq!(read_line(&mut file), "Hello");

    file.reopen(&path, FileMode::APPEND | FileMode::EXISTING_ONLY).unwrap();
    file.write_all(b" world").unwrap();

    file.reopen(&path, FileMode::READ).unwrap();
    assert_eq!(read_line(&mut file), "Hello world");
}

#[test]
fn test_reopen_update() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    let mut file = File::open(&first, FileMode::UPDATE).unwrap();
    file.reopen(&second, FileMode::READ | FileMode::UPDATE | FileMode::CREATE_NEW)
        .unwrap();
    file.write_all(b"baz").unwrap();
    file.rewind().unwrap();
    assert_eq!(read_line(&mut file), "baz");

    file.seek(SeekFrom::Start(3)).unwrap();
    file.write_all(b"bar").unwrap();
    file.rewind().unwrap();
    assert_eq!(read_line(&mut file), "bazbar");
}

#[test]
fn test_reopen_failure_releases() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("present");

    let mut file = File::open(&path, FileMode::UPDATE).unwrap();
    let result = file.reopen(dir.path().join("absent"), FileMode::READ);
    assert!(result.unwrap_err().is_os());
    assert!(!file.is_open(), "A failed reopen should leave the file released.");
    assert_eq!(
        file.write(b"lost").unwrap_err().kind(),
        ErrorKind::NotConnected
    );

    file.reopen(&path, FileMode::READ).unwrap();
    assert!(file.is_open(), "A released file should be reusable.");
}

#[test]
fn test_close() {
    let dir = TempDir::new().unwrap();

    let mut file = File::default();
    assert!(!file.is_open());
    assert!(file.close().is_ok(), "Closing a released file should do nothing.");

    file.reopen(dir.path().join("closed"), FileMode::UPDATE).unwrap();
    assert!(file.close().is_ok());
    assert!(file.close().is_ok());
    assert!(file.into_std().is_none());
}

#[test]
fn test_into_std() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("std");

    let mut file = File::open(&path, FileMode::TRUNCATE).unwrap();
    file.write_all(b"shared").unwrap();
    let std_file = file.into_std().unwrap();
    assert_eq!(std_file.metadata().unwrap().len(), 6);
}

#[cfg(unix)]
#[test]
fn test_open_irregular() {
    let dir = TempDir::new().unwrap();

    match File::open(dir.path(), FileMode::READ) {
        Err(OpenError::Wrap(WrapError::IrregularFile(e))) => {
            assert_eq!(e.found, crate::fs::FileType::Directory)
        },
        other => panic!("expected a wrapping error, got {other:?}"),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_open_irregular_closes_fd() {
    const ATTEMPTS: usize = 256;

    fn open_fds() -> usize {
        std::fs::read_dir("/proc/self/fd").unwrap().count()
    }

    let dir = TempDir::new().unwrap();
    let before = open_fds();
    for _ in 0..ATTEMPTS {
        assert!(File::open(dir.path(), FileMode::READ).unwrap_err().is_wrap());
    }
    let after = open_fds();

    // Other tests run in parallel and may hold a few descriptors at either count, but a leak here
    // would add one per attempt.
    assert!(
        after < before + ATTEMPTS / 2,
        "Rejected descriptors should be closed, went from {before} to {after} open."
    );
}

#[cfg(unix)]
#[test]
fn test_file_type_from_stat_mode() {
    use crate::fs::FileType;

    assert_eq!(FileType::from_stat_mode(libc::S_IFREG | 0o644), FileType::Regular);
    assert_eq!(FileType::from_stat_mode(libc::S_IFDIR | 0o755), FileType::Directory);
    assert_eq!(
        FileType::from_stat_mode(libc::S_IFLNK | 0o777),
        FileType::Other,
        "Links are followed when opening, so they have no type of their own."
    );
}

#[cfg(unix)]
#[test]
fn test_open_invalid_path() {
    let path = std::path::Path::new("bad\0path");
    assert!(File::open(path, FileMode::READ).unwrap_err().is_invalid_path());
}

#[cfg(unix)]
#[test]
fn test_append_is_atomic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log");

    let mut first = File::open(&path, FileMode::APPEND).unwrap();
    let mut second = File::open(&path, FileMode::APPEND).unwrap();
    first.write_all(b"one").unwrap();
    second.write_all(b"two").unwrap();
    first.seek(SeekFrom::Start(0)).unwrap();
    first.write_all(b"three").unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "onetwothree",
        "Appending writes should always land at the end."
    );
}
