// Copyright 2025 Irreducible Inc.

use std::str::FromStr;

use bigint::BigInt;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;

fn random_value(rng: &mut impl Rng, digits: usize) -> BigInt {
	let mut s = String::with_capacity(digits);
	s.push(rng.random_range(b'1'..=b'9') as char);
	for _ in 1..digits {
		s.push(rng.random_range(b'0'..=b'9') as char);
	}
	BigInt::from_str(&s).expect("generated string is a valid decimal integer")
}

fn bench_mul(c: &mut Criterion) {
	let mut group = c.benchmark_group("mul");
	let mut rng = rand::rng();

	for digits in [64, 256, 1024] {
		group.throughput(Throughput::Elements(digits as u64));
		let lhs = random_value(&mut rng, digits);
		let rhs = random_value(&mut rng, digits);
		group.bench_function(format!("{digits}x{digits}"), |b| b.iter(|| &lhs * &rhs));
	}

	group.finish();
}

fn bench_div_rem(c: &mut Criterion) {
	let mut group = c.benchmark_group("div_rem");
	let mut rng = rand::rng();

	for digits in [64, 256, 1024] {
		group.throughput(Throughput::Elements(digits as u64));
		let dividend = random_value(&mut rng, 2 * digits);
		let divisor = random_value(&mut rng, digits);
		group.bench_function(format!("{}/{digits}", 2 * digits), |b| {
			b.iter(|| dividend.checked_div_rem(&divisor))
		});
	}

	group.finish();
}

criterion_group!(arith_benches, bench_mul, bench_div_rem);
criterion_main!(arith_benches);
