use proptest::prelude::*;
use ust_document::{Document, LineEnding, Record, RenderOptions, parse, render};

/// Tags that read back as headers: no leading `[` issues, no line breaks,
/// no trailing whitespace.
fn tag() -> impl Strategy<Value = String> {
    prop_oneof![
        (0usize..10_000).prop_map(|index| format!("#{index:04}")),
        Just("#VERSION".to_string()),
        Just("#SETTING".to_string()),
        Just("#TRACKEND".to_string()),
        "#[A-Za-z0-9]{1,8}",
    ]
}

fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Length".to_string()),
        Just("Lyric".to_string()),
        Just("NoteNum".to_string()),
        Just("PBW".to_string()),
        "[A-Za-z@][A-Za-z0-9_@-]{0,11}",
    ]
}

/// Values without line breaks or trailing whitespace.
fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (-10_000i64..10_000).prop_map(|n| n.to_string()),
        "[あ-ん]{1,3}",
        "[ -~&&[^\\[]]{0,10}[!-~]",
    ]
}

fn record() -> impl Strategy<Value = Record> {
    (tag(), prop::collection::vec((key(), value()), 0..6)).prop_map(|(tag, fields)| {
        let mut record = Record::new(tag);
        for (key, value) in fields {
            record.set_raw(key, value);
        }
        record
    })
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec(record(), 0..8).prop_map(Document::from_records)
}

fn options() -> impl Strategy<Value = RenderOptions> {
    prop_oneof![Just(LineEnding::Lf), Just(LineEnding::CrLf)].prop_map(|line_ending| {
        RenderOptions {
            line_ending,
            normalize: false,
        }
    })
}

proptest! {
    #[test]
    fn test_parse_render_round_trip(doc in document(), options in options()) {
        let text = render(&doc, &options);
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed, doc);
    }

    #[test]
    fn test_render_is_idempotent(doc in document(), options in options()) {
        let first = render(&doc, &options);
        let second = render(&parse(&first).unwrap(), &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_is_stable(doc in document()) {
        let once = doc.normalized();
        prop_assert_eq!(once.normalized(), once.clone());
        prop_assert_eq!(once.len(), doc.len());
    }
}
