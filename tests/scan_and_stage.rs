//! End-to-end flow: probe real entries, then stage data in ephemeral files.

use std::fs;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

use cloudprobe::{
    AllocError, Allocator, AllocatorOptions, CleanupPolicy, FileAttributes, ScanDecision, Stat,
    allocate, classify,
};
use test_support::{ScratchDir, SyntheticStatus};

#[test]
fn local_tree_is_safe_to_read() {
    let scratch = ScratchDir::new().unwrap();
    scratch.write_file("a.txt", b"alpha").unwrap();
    scratch.write_file("b.bin", &[0u8; 512]).unwrap();
    scratch.mkdir("nested").unwrap();

    for entry in fs::read_dir(scratch.path()).unwrap() {
        let status = Stat::from_dir_entry(&entry.unwrap()).unwrap();
        assert_eq!(classify(&status), ScanDecision::Local);
    }
}

#[test]
fn stage_then_clean_up() {
    let scratch = ScratchDir::new().unwrap();
    let source = scratch.write_file("report.docx", b"quarterly numbers").unwrap();
    let status = Stat::from_path(&source).unwrap();
    assert!(classify(&status).is_safe_to_read());

    let mut staged = allocate(scratch.path(), "stage").unwrap();
    staged.write_all(&fs::read(&source).unwrap()).unwrap();
    staged.seek(SeekFrom::Start(0)).unwrap();
    let mut copy = Vec::new();
    staged.read_to_end(&mut copy).unwrap();
    assert_eq!(copy, b"quarterly numbers");

    let path = staged.path().to_path_buf();
    staged.close().unwrap();
    assert_eq!(fs::metadata(&path).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(scratch.entries().unwrap(), vec!["report.docx"]);
}

#[test]
fn kept_staging_file_outlives_handle() {
    let scratch = ScratchDir::new().unwrap();
    let allocator = Allocator::new(AllocatorOptions::new().cleanup(CleanupPolicy::Keep));

    let mut staged = allocator.allocate(scratch.path(), "keep-").unwrap();
    staged.write_all(b"persist").unwrap();
    let path = staged.path().to_path_buf();
    staged.close().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"persist");
}

#[test]
fn bad_prefix_surfaces_as_invalid_input() {
    let scratch = ScratchDir::new().unwrap();
    let err = allocate(scratch.path(), "a/b").unwrap_err();

    assert!(matches!(err, AllocError::InvalidPrefix(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(scratch.is_empty().unwrap());
}

#[cfg(windows)]
#[test]
fn synthetic_placeholder_is_remote() {
    let placeholder =
        SyntheticStatus::file("cloud.docx").with_attributes(FileAttributes::RECALL_ON_DATA_ACCESS);
    assert_eq!(classify(&placeholder), ScanDecision::Remote);

    let unknown = SyntheticStatus::file("odd");
    let decision = classify(&unknown);
    assert!(decision.is_unknown());
    assert!(!decision.should_skip());
}

#[cfg(not(windows))]
#[test]
fn synthetic_placeholder_is_local_without_recall_support() {
    let placeholder =
        SyntheticStatus::file("cloud.docx").with_attributes(FileAttributes::RECALL_ON_DATA_ACCESS);
    assert_eq!(classify(&placeholder), ScanDecision::Local);
    assert_eq!(classify(&SyntheticStatus::file("odd")), ScanDecision::Local);
}
