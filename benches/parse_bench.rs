// benches/parse_bench.rs
//
// Parse and select over a few content shapes:
//   • plain HTML without markers (passthrough)
//   • a short course title in four languages
//   • a long course summary with heavy markup
//   • an unterminated opener followed by a lot of text
//
// Run with `cargo bench --bench parse`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mlang::{Context, Multilang, parse, select_with};

fn samples() -> Vec<(&'static str, String)> {
    let paragraph = "<p>Designed for different grade levels, the course promotes <strong>critical thinking</strong>, financial literacy, and tech awareness.</p>";
    vec![
        ("plain", paragraph.repeat(8)),
        (
            "title",
            "{mlang en}Crypto for kids{mlang}{mlang pt_br}Cripto para crianças{mlang}{mlang es}Cripto para niños{mlang}{mlang}Crypto{mlang}"
                .to_string(),
        ),
        (
            "summary",
            format!(
                "\n  {{mlang en}}{en}{{mlang}}\n  {{mlang pt_br}}{pt}{{mlang}}\n",
                en = paragraph.repeat(20),
                pt = paragraph.repeat(20)
            ),
        ),
        ("unterminated", format!("{{mlang en}}{}", paragraph.repeat(20))),
    ]
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, text) in samples() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(parse(black_box(text))))
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let ctx = Context::new("fr").with_fallback("pt_BR");
    let multilang = Multilang::builder()
        .current_language("fr")
        .fallback_language("pt_BR")
        .build();
    for (name, text) in samples() {
        let map = parse(&text);
        group.bench_function(BenchmarkId::new("parsed", name), |b| {
            b.iter(|| black_box(select_with(&map, &ctx, &text)))
        });
        group.bench_with_input(BenchmarkId::new("end_to_end", name), &text, |b, text| {
            b.iter(|| black_box(multilang.select(black_box(text))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_select);
criterion_main!(benches);
