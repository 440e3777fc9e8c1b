//! Benchmarks for the padel scoring engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- full_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use padel_score::{
    MatchEngine, MatchFormat, MatchInfo, MatchSetup, RemoteCommand, Scoreboard, SnapshotLog, Team,
};

// ============================================================================
// HELPER FUNCTIONS - Deterministic point generation
// ============================================================================

/// Generate a deterministic sequence of point winners
fn generate_points(count: usize, seed: u64) -> Vec<Team> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| if rng.gen_bool(0.5) { Team::One } else { Team::Two })
        .collect()
}

/// Engine partway through a deuce game in the second set
fn mid_match_engine() -> MatchEngine {
    let mut engine = MatchEngine::new(MatchFormat::BestOf3Sets);
    for _ in 0..24 {
        engine.score_point(Team::One);
    }
    for team in [Team::One, Team::Two, Team::One, Team::Two, Team::One, Team::Two] {
        engine.score_point(team);
    }
    engine
}

// ============================================================================
// BENCHMARK: Single Point Latency
// ============================================================================

fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_point");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("score_at_deuce", |b| {
        b.iter_batched(
            mid_match_engine,
            |mut engine| black_box(engine.score_point(Team::One)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("subtract_at_deuce", |b| {
        b.iter_batched(
            mid_match_engine,
            |mut engine| black_box(engine.subtract_point(Team::Two)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Full Match
// ============================================================================

fn bench_full_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_match");
    group.measurement_time(Duration::from_secs(10));

    let points = generate_points(2_000, 42);

    for format in MatchFormat::ALL {
        group.bench_with_input(BenchmarkId::new("format", format.name()), &format, |b, &format| {
            b.iter(|| {
                let mut engine = MatchEngine::new(format);
                for team in points.iter() {
                    if engine.is_match_finished() {
                        break;
                    }
                    engine.score_point(*team);
                }
                black_box(engine.winner())
            });
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Snapshot and State Root
// ============================================================================

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    group.measurement_time(Duration::from_secs(5));

    let engine = mid_match_engine();
    let info = MatchInfo::default();

    group.bench_function("state_root", |b| {
        b.iter(|| black_box(engine.state_root()));
    });

    group.bench_function("snapshot_json", |b| {
        b.iter(|| {
            let snapshot = engine.snapshot(&info).ok();
            black_box(snapshot.and_then(|s| s.to_json().ok()))
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Scoreboard Throughput
// ============================================================================

fn bench_scoreboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoreboard");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for count in [100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        let points = generate_points(count, 12345);

        group.bench_with_input(BenchmarkId::new("commands", count), &points, |b, points| {
            b.iter_batched(
                || {
                    let mut board = Scoreboard::new(MatchSetup::default());
                    board.subscribe(SnapshotLog::bounded(16));
                    board
                },
                |mut board| {
                    for team in points.iter() {
                        if board.engine().is_match_finished() {
                            board.apply(RemoteCommand::ResetMatch);
                        }
                        board.apply(RemoteCommand::ScorePoint { team: *team });
                    }
                    black_box(board.engine().revision())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_single_point,
    bench_full_match,
    bench_snapshot,
    bench_scoreboard
);

criterion_main!(benches);
