use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phoneplan::{PHONE_NUMBER_UTIL, PhoneNumberFormat};

use phonenumber::{
    self as rlp,
    country::Id::{self, DE, GB, IT, RU, US}, Mode,
};

type TestEntity = (&'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("(201) 555-0123", "US", US),
        ("+44 20 7031 3000", "GB", GB),
        ("07400 123456", "GB", GB),
        ("030 123456", "DE", DE),
        ("02 1234 5678", "IT", IT),
        ("8 (912) 345-67-89", "RU", RU),
    ]
}

fn convert_to_rlp_numbers(numbers: &[TestEntity]) -> Vec<rlp::PhoneNumber> {
    numbers
        .iter()
        .map(|s| rlp::parse(Some(s.2), s.0).unwrap())
        .collect()
}

fn convert_to_phoneplan_numbers(numbers: &[TestEntity]) -> Vec<phoneplan::PhoneNumber> {
    numbers
        .iter()
        .map(|s| PHONE_NUMBER_UTIL.parse(s.0, Some(s.1)).unwrap())
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let rlp_numbers = convert_to_rlp_numbers(&numbers);
    let numbers = convert_to_phoneplan_numbers(&numbers);

    let mut group = c.benchmark_group("Formatting Comparison");

    let mut test = |format_a: PhoneNumberFormat, format_b: Mode| {
        group.bench_function(format!("phoneplan: format({:?})", format_a), |b| {
            b.iter(|| {
                for number in &numbers {
                    PHONE_NUMBER_UTIL.format(black_box(number), black_box(format_a));
                }
            })
        });

        group.bench_function(format!("rust-phonenumber: format({:?})", format_b), |b| {
            b.iter(|| {
                for number in &rlp_numbers {
                    rlp::format(black_box(number)).mode(format_b).to_string();
                }
            })
        });
    };

    test(PhoneNumberFormat::E164, Mode::E164);
    test(PhoneNumberFormat::International, Mode::International);
    test(PhoneNumberFormat::National, Mode::National);
    test(PhoneNumberFormat::RFC3966, Mode::Rfc3966);
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
