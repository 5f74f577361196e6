use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use race_core::scramble::{Scrambler, DEFAULT_JUNK_ALPHABET};
use race_core::segment::Passages;
use race_session::PlayerSession;

fn session_for(text: &str, junk: &[usize]) -> PlayerSession {
    let mut session = PlayerSession::new(Scrambler::with_seed(DEFAULT_JUNK_ALPHABET, 1));
    session.load_segment(text);
    for &i in junk {
        session.mark_junk(i);
    }
    session
}

fn bench_judge(c: &mut Criterion) {
    let mut group = c.benchmark_group("judge");
    let text = Passages::builtin().hard[4].clone();
    let half: String = text.chars().take(text.chars().count() / 2).collect();

    for (name, junk) in [("clean", vec![]), ("junked", vec![1, 5, 9, 13])] {
        let mut session = session_for(&text, &junk);
        group.bench_with_input(BenchmarkId::new("half_typed", name), &half, |b, typed| {
            b.iter(|| session.judge(black_box(typed)))
        });
    }
    group.finish();
}

fn bench_junk_target(c: &mut Criterion) {
    let text = Passages::builtin().hard[4].clone();
    let session = session_for(&text, &[]);
    let len = text.chars().count();
    c.bench_function("junk_target/sweep", |b| {
        b.iter(|| {
            let mut sum = 0;
            for typed in 0..=len {
                sum += session.junk_target(black_box(typed));
            }
            sum
        })
    });
}

criterion_group!(benches, bench_judge, bench_junk_target);
criterion_main!(benches);
