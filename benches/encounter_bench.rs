//! Encounter throughput benchmarks
//!
//! ```bash
//! cargo bench --bench encounter_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use neon_runner::combat::{compute_damage, run_encounter, NullSink, ScriptedActions};
use neon_runner::content::make_enemy;
use neon_runner::core::rng::seeded;
use neon_runner::core::GameConfig;
use neon_runner::entity::{create_player, ClassKind};
use neon_runner::session::{AutoPilot, Policy, Session, SessionStep};

fn bench_damage_roll(c: &mut Criterion) {
    let mut rng = seeded(1);
    c.bench_function("compute_damage", |b| {
        b.iter(|| compute_damage(black_box(18), black_box(6), black_box(0.12), &mut rng));
    });
}

fn bench_single_encounter(c: &mut Criterion) {
    let mut group = c.benchmark_group("encounter");
    for danger in [1u32, 3, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(danger), &danger, |b, &danger| {
            let mut rng = seeded(7);
            b.iter(|| {
                let mut player = create_player("bench", ClassKind::Engineer);
                let mut enemy = make_enemy(danger, &mut rng);
                run_encounter(
                    &mut player,
                    &mut enemy,
                    &mut ScriptedActions::default(),
                    &mut rng,
                    &mut NullSink,
                )
            });
        });
    }
    group.finish();
}

fn bench_full_session(c: &mut Criterion) {
    c.bench_function("session/cautious", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = seeded(seed);
            let mut pilot = AutoPilot::new(Policy::Cautious);
            let mut session = Session::start("bench", ClassKind::Analyst, GameConfig::default());
            while session.encounters < 30 {
                let (_, step) = session.play_encounter(&mut pilot, &mut rng, &mut NullSink);
                if step != SessionStep::Continue {
                    break;
                }
            }
            black_box(session.score)
        });
    });
}

criterion_group!(
    benches,
    bench_damage_roll,
    bench_single_encounter,
    bench_full_session
);
criterion_main!(benches);
