//! Performance benchmarks for Ravel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ravel::model::{tangle, ChunkName};
use ravel::readers::parse_document;
use ravel::weave::{weave, MarkdownFormatter};

const MAX_DEPTH: usize = 128;

fn generate_document(num_chunks: usize, lines_per_chunk: usize) -> String {
    let mut doc = String::from("A generated benchmark document.\n\n");

    // Main chunk referencing all the others
    doc.push_str("<<main>>=\n");
    for i in 0..num_chunks {
        doc.push_str(&format!("<<chunk{}>>\n", i));
    }
    doc.push_str("@\n\n");

    for i in 0..num_chunks {
        doc.push_str(&format!("Prose introducing chunk {}.\n\n", i));
        doc.push_str(&format!("<<python:chunk{}>>=\n", i));
        for j in 0..lines_per_chunk {
            doc.push_str(&format!("print('chunk {} line {}')\n", i, j));
        }
        doc.push_str("@\n\n");
    }

    doc
}

fn generate_nested_document(depth: usize, breadth: usize) -> String {
    let mut doc = String::from("A nested benchmark document.\n\n");

    fn generate_chunk(doc: &mut String, prefix: &str, depth: usize, breadth: usize) {
        let name = if prefix.is_empty() { "main" } else { prefix };

        doc.push_str(&format!("<<{}>>=\n", name));
        if depth > 0 {
            for i in 0..breadth {
                let child = child_name(prefix, i);
                doc.push_str(&format!("  <<{}>>\n", child));
            }
        } else {
            doc.push_str("pass\n");
        }
        doc.push_str("@\n\n");

        if depth > 0 {
            for i in 0..breadth {
                let child = child_name(prefix, i);
                generate_chunk(doc, &child, depth - 1, breadth);
            }
        }
    }

    fn child_name(prefix: &str, i: usize) -> String {
        if prefix.is_empty() {
            format!("child{}", i)
        } else {
            format!("{}_{}", prefix, i)
        }
    }

    generate_chunk(&mut doc, "", depth, breadth);
    doc
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for num_chunks in [10, 50, 100, 500].iter() {
        let input = generate_document(*num_chunks, 10);
        group.bench_with_input(BenchmarkId::new("chunks", num_chunks), &input, |b, input| {
            b.iter(|| parse_document(black_box(input), None))
        });
    }

    group.finish();
}

fn bench_tangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tangle");

    for num_chunks in [10, 50, 100, 500].iter() {
        let input = generate_document(*num_chunks, 10);
        let doc = parse_document(&input, None);

        group.bench_with_input(BenchmarkId::new("chunks", num_chunks), &doc, |b, doc| {
            b.iter(|| {
                tangle(black_box(doc), &ChunkName::new("main"), MAX_DEPTH)
                    .unwrap()
                    .map(|line| line.unwrap().text.len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_tangle_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("tangle_nested");

    for depth in [2, 3, 4, 5].iter() {
        let input = generate_nested_document(*depth, 3);
        let doc = parse_document(&input, None);
        let total_chunks = doc.len();

        group.bench_with_input(
            BenchmarkId::new("depth", format!("d{}({}chunks)", depth, total_chunks)),
            &doc,
            |b, doc| {
                b.iter(|| {
                    tangle(black_box(doc), &ChunkName::new("main"), MAX_DEPTH)
                        .unwrap()
                        .map(|line| line.unwrap().text.len())
                        .sum::<usize>()
                })
            },
        );
    }

    group.finish();
}

fn bench_weave(c: &mut Criterion) {
    let mut group = c.benchmark_group("weave");

    let formatter = MarkdownFormatter::new(true);

    for num_chunks in [10, 50, 100, 500].iter() {
        let input = generate_document(*num_chunks, 10);
        let doc = parse_document(&input, None);

        group.bench_with_input(BenchmarkId::new("chunks", num_chunks), &doc, |b, doc| {
            b.iter(|| {
                weave(black_box(doc), &formatter, None)
                    .map(|line| line.text.len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_tangle, bench_tangle_nested, bench_weave);
criterion_main!(benches);
