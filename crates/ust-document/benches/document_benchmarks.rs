use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ust_document::{Document, Draft, RenderOptions, parse, render};

/// A project with `notes` notes, the size of a long song.
fn project(notes: usize) -> Document {
    Document::project(
        [("Tempo", 120.0)],
        (0..notes).map(|index| {
            Draft::from_iter([
                ("Length", ust_document::FieldValue::from(480)),
                ("Lyric", "あ".into()),
                ("NoteNum", (60 + (index % 12) as i64).into()),
                ("PBW", "80,120,40".into()),
                ("PBY", "0,-1.5,0".into()),
            ])
        }),
    )
}

fn parse_benchmark(c: &mut Criterion) {
    let text = render(&project(500), &RenderOptions::default());
    c.bench_function("parser::parse (500 notes)", |b| {
        b.iter(|| parse(black_box(&text)).unwrap())
    });
}

fn render_benchmark(c: &mut Criterion) {
    let doc = project(500);
    let options = RenderOptions::default();
    c.bench_function("writer::render (500 notes)", |b| {
        b.iter(|| render(black_box(&doc), black_box(&options)))
    });
}

criterion_group!(benches, parse_benchmark, render_benchmark);
criterion_main!(benches);
