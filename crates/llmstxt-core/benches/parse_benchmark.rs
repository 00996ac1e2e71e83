//! Benchmarks comparing llms.txt parsing vs a full pulldown-cmark pass
//!
//! Run with: cargo bench -p llmstxt-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use llmstxt_core::{lint, normalize, parse};
use pulldown_cmark::{Options, Parser as MdParser};

const SAMPLE: &str = r#"# FastHTML

> FastHTML is a python library which brings together Starlette, Uvicorn, HTMX, and fastcore's `FT` "FastTags" into a library for creating server-rendered hypermedia applications.

Important notes:

- Although parts of its API are inspired by FastAPI, it is *not* compatible with FastAPI syntax and is not targeted at creating API services
- FastHTML is compatible with JS-native web components and any vanilla JS library, but not with React, Vue, or Svelte.

## Docs

- [FastHTML quick start](https://docs.fastht.ml/path/quickstart.html.md): A brief overview of many FastHTML features
- [HTMX reference](https://raw.githubusercontent.com/path/reference.md): Brief description of all HTMX attributes, CSS classes, headers, events, extensions, js lib methods, and config options

## Examples

- [Todo list application](https://raw.githubusercontent.com/path/adv_app.py): Detailed walk-thru of a complete CRUD app in FastHTML showing idiomatic use of FastHTML and HTMX patterns.

## Optional

- [Starlette full documentation](https://gist.githubusercontent.com/path/starlette-sml.md): A subset of the Starlette documentation useful for FastHTML development.
"#;

const WRAPPED_SUMMARY: &str = "# FastHTML\n\n> FastHTML is a python library which brings together\n> Starlette, Uvicorn, HTMX, and fastcore's `FT` \"FastTags\"\n> into a library for creating server-rendered hypermedia\n> applications.\n\n## Docs\n\n- [Quick start](https://docs.fastht.ml/quickstart.md)\n";

/// The sample with its section block repeated `n` times under fresh names.
fn scaled_sample(n: usize) -> String {
    let (head, sections) = SAMPLE.split_at(SAMPLE.find("## Docs").unwrap_or(SAMPLE.len()));
    let mut out = String::from(head);
    for i in 0..n {
        out.push_str(&sections.replace("## ", &format!("## {i} ")));
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("llms_txt", |b| {
        b.iter(|| {
            let doc = parse(black_box(SAMPLE)).unwrap();
            black_box(doc.link_count())
        })
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(SAMPLE), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.bench_function("lint", |b| b.iter(|| black_box(lint(black_box(SAMPLE)).status)));

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1, 5, 10, 20].iter() {
        let content = scaled_sample(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("llms_txt", size), &content, |b, content| {
            b.iter(|| {
                let doc = parse(black_box(content)).unwrap();
                black_box(doc.link_count())
            })
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("wrapped_summary", |b| {
        b.iter(|| black_box(normalize(black_box(WRAPPED_SUMMARY)).len()))
    });

    group.bench_function("already_normalized", |b| {
        b.iter(|| black_box(normalize(black_box(SAMPLE)).len()))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_scaling, bench_normalize);
criterion_main!(benches);
