//! End-to-end tests for the read-modify-write cycle
//!
//! config loading -> open (detect, decode, parse) -> edit -> save -> reopen

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use ust_document::{Document, Draft, FieldValue, Record};
use ust_encoding::{SHIFT_JIS, UTF_8, UTF_16LE};
use ust_fs::{Error, SaveOptions, UstConfig, open, open_with, save};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/ust")
        .join(name)
}

/// A temp workspace holding a copy of the Shift_JIS fixture
fn setup_workspace() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let song = temp.path().join("song.ust");
    fs::copy(fixture("song_sjis.ust"), &song).unwrap();
    (temp, song)
}

#[test]
fn test_edit_cycle_with_config() {
    let (temp, song) = setup_workspace();
    let config_path = temp.path().join("ust.toml");
    fs::write(
        &config_path,
        "[read]\nthreshold = 0.6\n\n[write]\nencoding = \"utf-16le\"\nline_ending = \"lf\"\nnormalize = true\n",
    )
    .unwrap();
    let config = UstConfig::load(&config_path).unwrap();

    // 1. Open
    let opened = open_with(&song, &config.normalizer(), config.read_encoding().unwrap()).unwrap();
    assert_eq!(opened.encoding, SHIFT_JIS);
    let mut doc = opened.document;

    // 2. Edit: change a lyric, insert a note, quantize
    doc.get_mut("#0001").unwrap().set("Lyric", "さあ");
    let after = doc.position("#0003").unwrap() + 1;
    doc.insert_at(
        after,
        Record::from_fields(
            "#0099",
            [
                ("Length", FieldValue::from(245)),
                ("Lyric", "ん".into()),
                ("NoteNum", 70.into()),
            ],
        ),
    )
    .unwrap();
    doc.quantize(120).unwrap();

    // 3. Save to a new file
    let output = temp.path().join("edited.ust");
    save(&doc, &output, &config.save_options().unwrap()).unwrap();

    // 4. Reopen and verify
    let reopened = open_with(&output, &config.normalizer(), None).unwrap();
    assert_eq!(reopened.encoding, UTF_16LE);
    let doc = reopened.document;

    assert_eq!(doc.notes().count(), 12);
    let tags: Vec<_> = doc.notes().map(|note| note.tag().to_string()).collect();
    let expected: Vec<_> = (0..12).map(|i| format!("#{i:04}")).collect();
    assert_eq!(tags, expected);

    assert_eq!(doc.get("#0001").unwrap().lyric(), Some("さあ"));
    let inserted = doc.get("#0004").unwrap();
    assert_eq!(inserted.lyric(), Some("ん"));
    assert_eq!(inserted.length().unwrap(), Some(240));
    for note in doc.notes() {
        assert_eq!(note.length().unwrap().unwrap() % 120, 0, "{}", note.tag());
    }

    // Source untouched
    assert_eq!(
        fs::read(&song).unwrap(),
        fs::read(fixture("song_sjis.ust")).unwrap()
    );
}

#[test]
fn test_constructed_note_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("one.ust");
    let doc = Document::construct([Draft::from_iter([
        ("Length", FieldValue::from(480)),
        ("Lyric", "あ".into()),
        ("NoteNum", 63.into()),
    ])]);
    assert_eq!(doc.record(0).unwrap().tag(), "#0000");

    save(&doc, &path, &SaveOptions::default()).unwrap();
    let reopened = open(&path, None).unwrap();

    assert_eq!(reopened, doc);
}

#[rstest]
#[case::crlf(b"[#0000]\r\nLength=480\r\n[#0001]\r\nLength=240\r\n".as_slice())]
#[case::lf(b"[#0000]\nLength=480\n[#0001]\nLength=240\n".as_slice())]
#[case::mixed(b"[#0000]\r\nLength=480\n[#0001]\nLength=240\r\n".as_slice())]
fn test_line_terminators_on_disk(#[case] bytes: &[u8]) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("song.ust");
    fs::write(&path, bytes).unwrap();

    let doc = open(&path, None).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("#0001").unwrap().length().unwrap(), Some(240));
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let (_temp, song) = setup_workspace();
    let original = fs::read(&song).unwrap();

    let mut doc = open(&song, None).unwrap();
    doc.get_mut("#0001").unwrap().set("Lyric", "🎵");

    let result = save(&doc, &song, &SaveOptions::default());
    assert!(matches!(result, Err(Error::Encoding { .. })));
    assert_eq!(fs::read(&song).unwrap(), original);

    // The same document saves fine as UTF-8
    save(&doc, &song, &SaveOptions::default().with_encoding(UTF_8)).unwrap();
    assert_eq!(
        open(&song, None).unwrap().get("#0001").unwrap().lyric(),
        Some("🎵")
    );
}

#[test]
fn test_save_does_not_mutate_document() {
    let doc = open(fixture("unordered.ust"), None).unwrap();
    let before = doc.clone();
    let temp = TempDir::new().unwrap();
    let options = SaveOptions {
        normalize: true,
        ..SaveOptions::default()
    };

    save(&doc, temp.path().join("out.ust"), &options).unwrap();
    assert_eq!(doc, before);
}
