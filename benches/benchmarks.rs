criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        dealing_blackjack_hand,
        running_monte_carlo_episodes,
        running_temporal_episodes,
        running_qlearning_episodes,
        rendering_tables,
}

use robojack::blackjack::Blackjack;
use robojack::learning::Agent;
use robojack::learning::Simulator;
use robojack::save::Disk;

fn dealing_blackjack_hand(c: &mut criterion::Criterion) {
    let mut game = Blackjack::seeded(0);
    c.bench_function("deal a Blackjack hand", |b| {
        b.iter(|| {
            game.reset();
            game.state()
        })
    });
}

fn running_monte_carlo_episodes(c: &mut criterion::Criterion) {
    let mut agent = Agent::seeded(0);
    c.bench_function("run 1000 MC episodes", |b| b.iter(|| agent.mc_run(1000)));
}

fn running_temporal_episodes(c: &mut criterion::Criterion) {
    let mut agent = Agent::seeded(0);
    c.bench_function("run 1000 TD episodes", |b| b.iter(|| agent.td_run(1000)));
}

fn running_qlearning_episodes(c: &mut criterion::Criterion) {
    let mut agent = Agent::seeded(0);
    c.bench_function("run 1000 Q-learning episodes", |b| {
        b.iter(|| agent.q_run(1000, robojack::EPSILON))
    });
}

fn rendering_tables(c: &mut criterion::Criterion) {
    let mut agent = Agent::seeded(0);
    agent.q_run(1000, robojack::EPSILON);
    c.bench_function("render all seven tables", |b| b.iter(|| agent.render()));
}
