//! Benchmarks for the pagination engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use page_flow::{
    compute_page_count, headless, Block, Document, GeometryRegistry, HeadlessPaginator,
    PaginatorConfig,
};

fn paginator_with_paragraphs(count: usize) -> HeadlessPaginator {
    let blocks = (0..count)
        .map(|i| {
            Block::paragraph(format!(
                "Paragraph {} contains enough text to span multiple lines and test the line breaking algorithm.",
                i
            ))
        })
        .collect();
    let mut paginator = headless(Document::from_blocks(blocks), PaginatorConfig::default()).unwrap();
    paginator.on_content_changed().unwrap();
    paginator
}

fn bench_compute_page_count(c: &mut Criterion) {
    let a4 = GeometryRegistry::builtin().select("A4").unwrap();
    c.bench_function("compute_page_count", |b| {
        b.iter(|| compute_page_count(black_box(12_345.0), &a4, black_box(60.0), black_box(60.0)));
    });
}

fn bench_reflow_small(c: &mut Criterion) {
    c.bench_function("reflow_small_document", |b| {
        let mut paginator = paginator_with_paragraphs(5);
        b.iter(|| {
            black_box(paginator.on_content_changed().unwrap());
        });
    });
}

fn bench_reflow_medium(c: &mut Criterion) {
    c.bench_function("reflow_medium_document", |b| {
        // ~10 pages of content
        let mut paginator = paginator_with_paragraphs(200);
        b.iter(|| {
            black_box(paginator.on_content_changed().unwrap());
        });
    });
}

fn bench_event_storm(c: &mut Criterion) {
    c.bench_function("coalesced_event_storm", |b| {
        let mut paginator = paginator_with_paragraphs(50);
        let signal = paginator.signal();
        b.iter(|| {
            for _ in 0..100 {
                signal.content_changed();
            }
            black_box(paginator.flush().unwrap());
        });
    });
}

fn bench_geometry_switch(c: &mut Criterion) {
    c.bench_function("geometry_switch", |b| {
        let mut paginator = paginator_with_paragraphs(50);
        let mut toggle = false;
        b.iter(|| {
            toggle = !toggle;
            let name = if toggle { "Legal" } else { "A4" };
            black_box(paginator.select_geometry(name).unwrap());
        });
    });
}

fn bench_page_frames(c: &mut Criterion) {
    c.bench_function("build_page_frames", |b| {
        let paginator = paginator_with_paragraphs(200);
        b.iter(|| {
            black_box(paginator.page_frames());
        });
    });
}

criterion_group!(
    benches,
    bench_compute_page_count,
    bench_reflow_small,
    bench_reflow_medium,
    bench_event_storm,
    bench_geometry_switch,
    bench_page_frames,
);

criterion_main!(benches);
