use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use social_post_formatter::utils::text::{collapse_blank_lines, tidy_reply, truncate_with_ellipsis};

fn create_model_reply(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| format!("Paragraph {i} with some **bold** text and #hashtags 🚀"))
        .collect::<Vec<_>>()
        .join("\n\n\n\n\n")
}

fn bench_collapse_blank_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse_blank_lines");

    for paragraphs in [5, 50, 500] {
        let reply = create_model_reply(paragraphs);
        group.bench_with_input(
            BenchmarkId::new("paragraphs", paragraphs),
            &reply,
            |b, reply| b.iter(|| collapse_blank_lines(black_box(reply))),
        );
    }

    group.finish();
}

fn bench_truncate(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncate_with_ellipsis");

    let ascii = "a".repeat(10_000);
    let emoji = "🎉".repeat(10_000);
    for (name, text) in [("ascii", &ascii), ("emoji", &emoji)] {
        group.bench_with_input(BenchmarkId::new("limit_280", name), text, |b, text| {
            b.iter(|| truncate_with_ellipsis(black_box(text), black_box(280)))
        });
    }

    group.finish();
}

fn bench_tidy_reply(c: &mut Criterion) {
    let reply = format!("\n\n{}\n\n\n", create_model_reply(20));
    c.bench_function("tidy_reply", |b| b.iter(|| tidy_reply(black_box(&reply))));
}

criterion_group!(benches, bench_collapse_blank_lines, bench_truncate, bench_tidy_reply);
criterion_main!(benches);
