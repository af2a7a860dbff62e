use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inkling_core::layout::{locate, FontMetrics, HostMetrics};
use inkling_core::unicode::char_len;

fn bench_text(paragraphs: usize) -> String {
    let para = "The quick brown fox jumps over the lazy dog near the #river bank. ";
    let mut text = String::new();
    for _ in 0..paragraphs {
        text.push_str(para);
        text.push('\n');
    }
    text
}

fn bench_locate(c: &mut Criterion) {
    let host = HostMetrics {
        content_width: 600.0,
        content_height: 400.0,
        padding_left: 8.0,
        padding_top: 8.0,
        font: FontMetrics {
            cell_width: 8.0,
            row_height: 20.0,
        },
    };

    let mut group = c.benchmark_group("locate");
    for paragraphs in [1usize, 10, 100] {
        let text = bench_text(paragraphs);
        let caret = char_len(&text);
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &text,
            |b, text| {
                b.iter(|| locate(text, caret, &host));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
