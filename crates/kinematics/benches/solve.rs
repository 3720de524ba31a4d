use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kinematics::{trajectory, PhysicalObject, Scenario};

fn bench_contact_time(c: &mut Criterion) {
    let object = PhysicalObject::new([0.0, 10.0, 1.0], [0.0, 50.0, 50.0], [0.0, 0.0, 0.07]);
    c.bench_function("vector_contact_time", |b| {
        b.iter(|| black_box(object).equation().time_of_ground_contact())
    });
    c.bench_function("vertical_contact_time", |b| {
        b.iter(|| black_box(object).vertical_equation().time_of_ground_contact())
    });
}

fn bench_scenario_report(c: &mut Criterion) {
    let scenario = Scenario::projectiles();
    c.bench_function("projectiles_report", |b| b.iter(|| black_box(&scenario).report()));
}

fn bench_sampling(c: &mut Criterion) {
    let object = PhysicalObject::new([0.0, 0.0, 20.0], [0.0, 0.0, -1.0], [0.0, 0.0, 0.2]);
    c.bench_function("sample_until_contact", |b| {
        b.iter(|| trajectory::sample_until_contact(black_box(&object), 0.001).unwrap())
    });
}

criterion_group!(benches, bench_contact_time, bench_scenario_report, bench_sampling);
criterion_main!(benches);
