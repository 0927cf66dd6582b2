use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use luhnsum::{MorphologyConfig, Segmenter, Summarizer};

const ENGLISH_TEXT: &str = "The cat sat on the mat. A dog barked at the cat. \
The cat ran to the mat. Birds sing in the morning. The dog slept.";
const RUSSIAN_TEXT: &str = "Кошка спит на диване. Кошка ест рыбу. Собака лает на кошку. \
Он смотрит на них из окна.";

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    // Benchmark regex compilation separately from matching
    group.bench_function("segmenter_compilation", |b| {
        b.iter(|| {
            black_box(Segmenter::new().unwrap());
        })
    });

    let segmenter = Segmenter::new().unwrap();
    let long_text = ENGLISH_TEXT.repeat(200);
    group.throughput(Throughput::Bytes(long_text.len() as u64));
    group.bench_function("segment_long_english", |b| {
        b.iter(|| {
            black_box(segmenter.segment(black_box(&long_text)));
        })
    });

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    let lookup = MorphologyConfig::default().build_lookup().unwrap();
    let summarizer = Summarizer::new(lookup).unwrap();

    for (name, text) in [("english", ENGLISH_TEXT), ("russian", RUSSIAN_TEXT)] {
        // WHY: repeat the sample so frequency counts accumulate across many statements
        let document = text.repeat(100);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_function(format!("{name}_rate_0_3"), |b| {
            b.iter(|| {
                summarizer.summarize(black_box(&document), 0.3).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_summarize);
criterion_main!(benches);
