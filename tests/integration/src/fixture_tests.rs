//! Golden-file tests using test-fixtures/ust
//!
//! The fixtures are real-world shaped UST files in the encodings found in
//! the wild. Reading them and writing them back must not change a byte.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use ust_document::{LineEnding, nn::from_nn};
use ust_encoding::{Normalizer, SHIFT_JIS, UTF_8};
use ust_fs::{SaveOptions, open, open_with, save};

/// Path to the UST fixtures (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures/ust
    manifest_dir.join("../../test-fixtures/ust")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

// ==========================================================================
// Reading
// ==========================================================================

#[test]
fn test_shift_jis_fixture_is_detected() {
    let opened = open_with(fixture("song_sjis.ust"), &Normalizer::new(), None).unwrap();
    assert_eq!(opened.encoding, SHIFT_JIS);

    let doc = opened.document;
    let settings = doc.settings().unwrap();
    assert_eq!(
        settings.get_raw("ProjectName"),
        Some("さくらさくら やよいのそらは")
    );
    assert_eq!(settings.get_raw("OutFile"), Some(""));
    assert_eq!(doc.tempo().unwrap(), Some(140.0));
    assert_eq!(doc.notes().count(), 11);
    assert_eq!(doc.total_length().unwrap(), 5755);
    assert_eq!(doc.pitch_range().unwrap(), Some((72, 64)));
}

#[test]
fn test_note_fields_read_from_fixture() {
    let doc = open(fixture("song_sjis.ust"), None).unwrap();

    let note = doc.get("#0001").unwrap();
    assert_eq!(note.lyric(), Some("さ"));
    assert_eq!(note.list("PBS").unwrap(), Some(vec![-40.0, 0.0]));
    assert_eq!(note.get_raw("Envelope"), Some("0,5,35,0,100,100,0"));
    assert_eq!(
        note.list("VBR").unwrap(),
        Some(vec![65.0, 180.0, 35.0, 20.0, 20.0, 0.0, 0.0, 0.0])
    );
    assert_eq!(doc.get("#0002").unwrap().get_raw("Flags"), Some("g-5B50"));
    assert!(doc.get("#0000").unwrap().is_rest());
}

#[test]
fn test_bom_fixture_matches_shift_jis_fixture() {
    let from_sjis = open(fixture("song_sjis.ust"), None).unwrap();
    let from_utf8 = open(fixture("song_utf8_bom.ust"), None).unwrap();
    assert_eq!(from_utf8, from_sjis);
}

// ==========================================================================
// Writing
// ==========================================================================

#[test]
fn test_shift_jis_fixture_saves_byte_identical() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("song.ust");

    let doc = open(fixture("song_sjis.ust"), None).unwrap();
    save(&doc, &output, &SaveOptions::default()).unwrap();

    assert_eq!(
        fs::read(&output).unwrap(),
        fs::read(fixture("song_sjis.ust")).unwrap()
    );
}

#[test]
fn test_unordered_fixture_normalizes_to_golden() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("normalized.ust");
    let options = SaveOptions {
        encoding: UTF_8,
        line_ending: LineEnding::Lf,
        normalize: true,
    };

    let doc = open(fixture("unordered.ust"), None).unwrap();
    save(&doc, &output, &options).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        fs::read_to_string(fixture("expected/unordered_normalized.ust")).unwrap()
    );
}

#[test]
fn test_nn_fixture_converts() {
    let text = fs::read_to_string(fixture("song.nn")).unwrap();
    let doc = from_nn(&text).unwrap();

    assert_eq!(doc.notes().count(), 3);
    assert_eq!(doc.tempo().unwrap(), Some(120.0));

    let last = doc.get("#0002").unwrap();
    assert_eq!(last.lyric(), Some("lu"));
    assert_eq!(last.length().unwrap(), Some(960));
    assert_eq!(last.note_num().unwrap(), Some(64));
    assert_eq!(last.get_raw("PBW"), Some("320,320,320"));
    assert_eq!(last.get_raw("PBY"), Some("0,-0.5,-1"));
    assert_eq!(last.get_raw("VBR"), Some("60,30,100,0,0,0,0,0"));
}
