//! Failure paths of open and save

use std::fs;
use tempfile::TempDir;
use ust_document::{Document, ParseErrorKind};
use ust_fs::{Error, SaveOptions, open, save};

#[test]
fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.ust");

    match open(&path, None) {
        Err(Error::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_save_into_missing_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no/such/dir/song.ust");
    let doc = Document::from_field_maps([[("Length", 480)]]);

    let result = save(&doc, &path, &SaveOptions::default());
    assert!(matches!(result, Err(Error::Write { .. })));
    assert!(!temp.path().join("no").exists());
}

#[test]
fn test_open_malformed_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.ust");
    fs::write(&path, "Lyric=a\n[#0000]\n").unwrap();

    match open(&path, None) {
        Err(Error::Parse { source, .. }) => {
            assert_eq!(source.line, 1);
            assert_eq!(source.kind, ParseErrorKind::ContentBeforeFirstSection);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_open_undetectable_bytes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("noise.ust");
    fs::write(&path, [0xFF; 64]).unwrap();

    let result = open(&path, None);
    assert!(matches!(
        result,
        Err(Error::Encoding {
            source: ust_encoding::Error::Undetermined { .. },
            ..
        })
    ));
}

#[test]
fn test_error_messages_name_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.ust");
    let message = open(&path, None).unwrap_err().to_string();
    assert!(message.contains("absent.ust"), "{message}");
}
