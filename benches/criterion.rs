use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::WallTime;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use itertools::Itertools;

use ahomatch::{Automaton, NaiveManyMatcher, PatternMatcher};

const TEXT: &str = "the quick brown fox jumps over the lazy dog while she sells sea \
                    shells by the sea shore and he hears his hers in the shelter";

/// All substrings of `TEXT` of length 3 to 5, in order of first occurrence.
fn patterns() -> Vec<&'static str> {
    let indices = TEXT.char_indices().map(|(i, _)| i).collect_vec();
    (3..=5)
        .flat_map(|len| indices.windows(len + 1).map(move |w| &TEXT[w[0]..w[len]]))
        .unique()
        .collect()
}

fn bench_matching<M: PatternMatcher>(
    name: &str,
    group: &mut BenchmarkGroup<WallTime>,
    patterns: &[&str],
    sizes: impl Iterator<Item = usize>,
    text: &str,
    mut get_matcher: impl FnMut(&[&str]) -> M,
) {
    group.sample_size(10);
    for n in sizes {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
            let matcher = get_matcher(&patterns[0..n]);
            b.iter(|| criterion::black_box(matcher.find_matches(text).count()));
        });
    }
}

fn perform_benches(c: &mut Criterion) {
    let patterns = patterns();
    let text = TEXT.repeat(20);
    let sizes = || (10..=patterns.len()).step_by(40);

    let mut group = c.benchmark_group("Many Patterns Matching");
    bench_matching(
        "Naive matching",
        &mut group,
        &patterns,
        sizes(),
        &text,
        |ps| NaiveManyMatcher::try_from_patterns(ps).unwrap(),
    );
    bench_matching(
        "Automaton matching",
        &mut group,
        &patterns,
        sizes(),
        &text,
        |ps| Automaton::try_from_patterns(ps).unwrap(),
    );
    group.finish();

    let mut group = c.benchmark_group("Automaton construction");
    group.sample_size(10);
    for n in sizes() {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("compile", n), &n, |b, &n| {
            b.iter(|| criterion::black_box(Automaton::try_from_patterns(&patterns[0..n])))
        });
    }
    group.finish();
}

criterion_group!(benches, perform_benches);
criterion_main!(benches);
