//! Criterion benchmarks for the scoring engine.
//!
//! Measures a full quiz result across catalog sizes to catch regressions in
//! the per-response resolution and ranking paths.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package compass-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use chrono::{DateTime, Utc};
use compass_core::{Category, Intensity, Question, QuizOption, Response};
use compass_scorer::{RecommendationCatalog, ScoringEngine};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Question counts to benchmark.
const QUESTION_COUNTS: &[usize] = &[10, 100, 1_000];

/// Options per generated question.
const OPTIONS_PER_QUESTION: usize = 4;

/// Build `count` questions whose options walk the categories in turn, and one
/// answer per question cycling through the intensities.
fn build_quiz(count: usize) -> (Vec<Question>, Vec<Response>) {
    let mut tags = Category::all().cycle();
    let mut intensities = (Intensity::MIN.get()..=Intensity::MAX.get())
        .filter_map(|value| Intensity::new(value).ok())
        .cycle();

    let questions: Vec<Question> = (0..count)
        .map(|q| {
            let options = (0..OPTIONS_PER_QUESTION)
                .map(|o| QuizOption::new(format!("o{o}"), tags.by_ref().take(2)))
                .collect();
            Question::new(format!("q{q}"), options)
        })
        .collect();
    let responses = questions
        .iter()
        .zip(intensities.by_ref())
        .map(|(question, intensity)| Response::new(question.id.clone(), "o1", intensity))
        .collect();
    (questions, responses)
}

fn bench_quiz_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("quiz_result");
    let catalog = RecommendationCatalog::builtin();
    let at = DateTime::<Utc>::UNIX_EPOCH;

    for &count in QUESTION_COUNTS {
        let (questions, responses) = build_quiz(count);
        let elements = u64::try_from(count).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(elements));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let engine = ScoringEngine::new(black_box(&questions), black_box(&responses));
                black_box(engine.quiz_result_at(catalog, at))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_quiz_result);
criterion_main!(benches);
