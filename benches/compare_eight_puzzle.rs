use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use puzzle_search::problems::eight_puzzle::EightPuzzleProblem;
use puzzle_search::problems::eight_puzzle::EightPuzzleSpace;
use puzzle_search::problems::eight_puzzle::EightPuzzleState;
use puzzle_search::report::Strategy;
use puzzle_search::space::Space;

fn solve(strategy: Strategy, problem: EightPuzzleProblem) -> usize {
    match strategy.run(problem) {
        Ok(solution) => solution.enqueued,
        Err(_) => 0,
    }
}

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("8-puzzle Search");

    let mut instances = vec![(
        "fixture".to_string(),
        EightPuzzleState::new([[1, 8, 2], [0, 4, 3], [7, 6, 5]]),
    )];
    for i in 0..3 {
        let mut rng = ChaCha8Rng::seed_from_u64(i);
        if let Some(s) = EightPuzzleSpace.random_state(&mut rng) {
            instances.push((format!("random:{i}"), s));
        }
    }

    for (name, start) in &instances {
        let problem = EightPuzzleProblem::new(*start);
        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), name),
                &problem,
                |b, p| b.iter(|| solve(strategy, p.clone())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, compare_search);
criterion_main!(benches);
