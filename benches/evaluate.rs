#[macro_use]
extern crate criterion;
extern crate ride_ev;

use criterion::Criterion;
use ride_ev::core::Card;
use ride_ev::ride::{EvCalculator, KnownCards};

fn evaluate_codes(c: &mut Criterion) {
    let calc = EvCalculator::default();
    c.bench_function("Evaluate from card codes", move |b| {
        b.iter(|| calc.evaluate_codes(["Ah", "Kh", "Qh"], "Jh"))
    });
}

fn evaluate_known(c: &mut Criterion) {
    let calc = EvCalculator::default();
    let known = KnownCards::new(
        [
            Card::try_from("2c").ok(),
            Card::try_from("2d").ok(),
            Card::try_from("2h").ok(),
        ],
        Card::try_from("7s").ok(),
    )
    .unwrap();
    c.bench_function("Evaluate validated selection", move |b| {
        b.iter(|| calc.evaluate_known(&known))
    });
}

criterion_group!(benches, evaluate_codes, evaluate_known);
criterion_main!(benches);
