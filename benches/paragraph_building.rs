//! Benchmarks for paragraph reconstruction over synthetic documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_paragraphs::layout::{build_paragraphs, LineFrequencyTable};
use pdf_paragraphs::{ExtractionConfig, ParagraphPipeline};

/// A document with a running header, page numbers and hyphenated body text.
fn synthetic_document(pages: usize) -> Vec<String> {
    (1..=pages)
        .map(|n| {
            let mut page = String::from("Annual Report 2024\n\n");
            for p in 0..8 {
                page.push_str(&format!(
                    "Paragraph {} of page {} begins with a fairly ordinary sen-\n\
                     tence that continues onto the next line and then\n\
                     finishes here.\n\n",
                    p, n
                ));
            }
            page.push_str(&format!("{}\n", n % 100));
            page
        })
        .collect()
}

fn bench_frequency_table(c: &mut Criterion) {
    let doc = synthetic_document(200);
    c.bench_function("line_frequency_table_200_pages", |b| {
        b.iter(|| LineFrequencyTable::build(black_box(&doc)))
    });
}

fn bench_single_page(c: &mut Criterion) {
    let doc = synthetic_document(50);
    let table = LineFrequencyTable::build(&doc);
    c.bench_function("build_paragraphs_one_page", |b| {
        b.iter(|| build_paragraphs(black_box(&doc[0]), &table, doc.len()))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for pages in [10usize, 100, 500] {
        let doc = synthetic_document(pages);
        for parallel in [false, true] {
            let pipeline = ParagraphPipeline::with_config(ExtractionConfig::new().with_parallel(parallel));
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, pages), &doc, |b, doc| {
                b.iter(|| pipeline.process(black_box(doc)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_frequency_table, bench_single_page, bench_pipeline);
criterion_main!(benches);
