use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use femto_core::{AbsolutePosition, EditorSession, Input, WindowSize, file_io};

fn large_text(line_count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.extend_from_slice(
            format!("{i:06} the quick brown fox jumps over the lazy dog (femto benchmark line)\n")
                .as_bytes(),
        );
    }
    out
}

fn session_for(text: &[u8]) -> EditorSession {
    EditorSession::new("bench.txt", file_io::split_lines(text), WindowSize::new(60, 120))
}

fn bench_large_file_split(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("large_file_split/50k_lines", |b| {
        b.iter(|| {
            let store = file_io::split_lines(black_box(&text));
            black_box(store.line_count());
        })
    });
}

fn bench_typing_in_middle(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("typing_middle/100_inserts", |b| {
        b.iter_batched(
            || {
                let mut session = session_for(&text);
                session.move_to(AbsolutePosition::new(25_000, 20));
                session.handle_input(Input::Byte(b'e')).unwrap();
                session
            },
            |mut session| {
                for _ in 0..100 {
                    session.handle_input(Input::Byte(b'x')).unwrap();
                }
                black_box(session.absolute_position());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_enter_and_join(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("split_join/100_pairs", |b| {
        b.iter_batched(
            || {
                let mut session = session_for(&text);
                session.move_to(AbsolutePosition::new(100, 10));
                session.handle_input(Input::Byte(b'e')).unwrap();
                session
            },
            |mut session| {
                for _ in 0..100 {
                    session.handle_input(Input::Byte(b'\r')).unwrap();
                    session.handle_input(Input::Byte(0x7f)).unwrap();
                }
                black_box(session.lines().line_count());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_scroll_through_document(c: &mut Criterion) {
    let text = large_text(50_000);
    let mut session = session_for(&text);

    c.bench_function("scroll_down/1000_rows", |b| {
        b.iter(|| {
            session.move_to(AbsolutePosition::new(0, 0));
            for _ in 0..1000 {
                session.handle_input(Input::Byte(b's')).unwrap();
            }
            black_box(session.snapshot().rows.len());
        })
    });
}

criterion_group!(
    benches,
    bench_large_file_split,
    bench_typing_in_middle,
    bench_enter_and_join,
    bench_scroll_through_document
);
criterion_main!(benches);
