use betramp::*;

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
        evaluating_kelly_schedule,
        solving_risk_dp_coarse,
        solving_risk_dp_fine,
        solving_risk_dp_free,
        optimizing_dinkelbach_kelly,
}

fn levels() -> Levels {
    Levels::new(MIN_BET, MAX_BET, BET_STEP).expect("default levels")
}

fn evaluating_kelly_schedule(c: &mut criterion::Criterion) {
    let ref buckets = Buckets::random();
    let ref schedule = Kelly::default().schedule(buckets, &levels());
    c.bench_function("evaluate a Kelly Schedule", |b| {
        b.iter(|| Evaluation::of(buckets, schedule))
    });
}

fn solving_risk_dp_coarse(c: &mut criterion::Criterion) {
    let ref buckets = Buckets::random();
    let ref levels = levels();
    let budget = Evaluation::of(buckets, &Kelly::default().schedule(buckets, levels))
        .expect("aligned")
        .risk;
    let solver = RiskDP::new(buckets, levels, 200, true).expect("solver");
    c.bench_function("solve RiskDP (200 bins, monotone)", |b| {
        b.iter(|| solver.solve(0.0, budget))
    });
}

fn solving_risk_dp_fine(c: &mut criterion::Criterion) {
    let ref buckets = Buckets::random();
    let ref levels = levels();
    let budget = Evaluation::of(buckets, &Kelly::default().schedule(buckets, levels))
        .expect("aligned")
        .risk;
    let solver = RiskDP::new(buckets, levels, RISK_BINS, true).expect("solver");
    c.bench_function("solve RiskDP (800 bins, monotone)", |b| {
        b.iter(|| solver.solve(0.0, budget))
    });
}

fn solving_risk_dp_free(c: &mut criterion::Criterion) {
    let ref buckets = Buckets::random();
    let ref levels = levels();
    let budget = Evaluation::of(buckets, &Kelly::default().schedule(buckets, levels))
        .expect("aligned")
        .risk;
    let solver = RiskDP::new(buckets, levels, 200, false).expect("solver");
    c.bench_function("solve RiskDP (200 bins, free)", |b| {
        b.iter(|| solver.solve(0.0, budget))
    });
}

fn optimizing_dinkelbach_kelly(c: &mut criterion::Criterion) {
    let ref buckets = Buckets::random();
    let ref levels = levels();
    let ref baseline = Kelly::default().schedule(buckets, levels);
    c.bench_function("optimize against Kelly (200 bins)", |b| {
        b.iter(|| {
            let solver = RiskDP::new(buckets, levels, 200, true).expect("solver");
            Dinkelbach::new(buckets, solver).optimize(baseline)
        })
    });
}
