// Copyright 2025 Irreducible Inc.
//! Multi-precision division (Knuth, TAOCP vol. 2, 4.3.1, Algorithm D).
//!
//! Division is the only engine with real subtlety: the quotient digit at each
//! position is estimated from a two-digit probe of the dividend and must then
//! be corrected, first against the divisor's second-highest digit and, in rare
//! cases, once more after the multiply-subtract over-shoots. Normalizing the
//! divisor so its top digit is at least `BASE / 2` bounds the estimation error
//! to at most two, which is what makes the correction steps terminate.

use crate::{
	error::Error,
	magnitude::{BASE, Magnitude},
};

/// Divides `lhs` by `rhs`, returning `(quotient, remainder)`.
///
/// Both slices must be canonical LSD-first digit sequences. Returns
/// [`Error::DivisionByZero`] when `rhs` is the zero magnitude.
pub(crate) fn unsigned_div_rem(lhs: &[u8], rhs: &[u8]) -> Result<(Magnitude, Magnitude), Error> {
	if rhs == [0] {
		return Err(Error::DivisionByZero);
	}

	// A dividend shorter than the divisor (or equal-length but smaller) needs
	// no digit loop at all.
	let dividend = Magnitude::from_digits(lhs.to_vec());
	let divisor = Magnitude::from_digits(rhs.to_vec());
	if dividend < divisor {
		return Ok((Magnitude::zero(), dividend));
	}

	if rhs.len() == 1 {
		let (quotient, remainder) = div_rem_by_digit(lhs, rhs[0]);
		return Ok((quotient, Magnitude::from_digits(vec![remainder])));
	}

	Ok(div_rem_knuth(lhs, rhs))
}

/// Single-precision fast path: divisor is one digit `1 <= v < BASE`.
///
/// Walks the dividend top-down keeping a running partial remainder, exactly as
/// in pencil-and-paper long division.
fn div_rem_by_digit(lhs: &[u8], divisor: u8) -> (Magnitude, u8) {
	debug_assert!(divisor != 0 && (divisor as u32) < BASE);
	let divisor = divisor as u32;
	let mut quotient = vec![0u8; lhs.len()];
	let mut remainder = 0u32;
	for (i, &digit) in lhs.iter().enumerate().rev() {
		let partial = remainder * BASE + digit as u32;
		quotient[i] = (partial / divisor) as u8;
		remainder = partial % divisor;
	}
	(Magnitude::from_digits(quotient), remainder as u8)
}

/// Multiplies a digit sequence by a single digit factor.
fn scale_by_digit(digits: &[u8], factor: u8) -> Vec<u8> {
	let mut scaled = Vec::with_capacity(digits.len() + 1);
	let mut carry = 0u32;
	for &digit in digits {
		let product = digit as u32 * factor as u32 + carry;
		scaled.push((product % BASE) as u8);
		carry = product / BASE;
	}
	if carry != 0 {
		scaled.push(carry as u8);
	}
	scaled
}

/// Algorithm D proper. Requires `rhs.len() >= 2` and `lhs >= rhs` as
/// magnitudes, both canonical.
fn div_rem_knuth(lhs: &[u8], rhs: &[u8]) -> (Magnitude, Magnitude) {
	let n = rhs.len();
	let m = lhs.len() - n;

	// D1: scale both operands so the divisor's top digit is at least BASE / 2.
	// The chosen factor never lengthens the divisor, since v * d < BASE^n.
	let d = (BASE / (rhs[n - 1] as u32 + 1)) as u8;
	let v = scale_by_digit(rhs, d);
	assert_eq!(v.len(), n, "normalization must not lengthen the divisor");

	// The dividend always gets one extra top digit, whether or not scaling
	// grew it; u[j + n] reads rely on it.
	let mut u = scale_by_digit(lhs, d);
	u.resize(lhs.len() + 1, 0);

	let v_top = v[n - 1] as u32;
	let v_next = v[n - 2] as u32;
	debug_assert!(v_top >= BASE / 2);

	let mut quotient = vec![0u8; m + 1];
	for j in (0..=m).rev() {
		// D3: estimate the quotient digit from the top two dividend digits,
		// then correct it against the divisor's second-highest digit. Once
		// rhat reaches BASE the inequality can no longer hold and the loop
		// must stop; skipping or reordering these checks yields wrong digits.
		let probe = u[j + n] as u32 * BASE + u[j + n - 1] as u32;
		let mut qhat = probe / v_top;
		let mut rhat = probe % v_top;
		while qhat >= BASE || qhat * v_next > BASE * rhat + u[j + n - 2] as u32 {
			qhat -= 1;
			rhat += v_top;
			if rhat >= BASE {
				break;
			}
		}

		// D4: subtract qhat * v from the dividend window u[j ..= j + n],
		// tracking the multiply carry and the subtraction borrow together.
		let mut carry = 0u32;
		let mut borrow = 0i32;
		for i in 0..n {
			let product = qhat * v[i] as u32 + carry;
			carry = product / BASE;
			let mut diff = u[j + i] as i32 - (product % BASE) as i32 - borrow;
			borrow = if diff < 0 {
				diff += BASE as i32;
				1
			} else {
				0
			};
			u[j + i] = diff as u8;
		}
		let mut diff = u[j + n] as i32 - carry as i32 - borrow;
		borrow = if diff < 0 {
			diff += BASE as i32;
			1
		} else {
			0
		};
		u[j + n] = diff as u8;

		// D6: a surviving borrow means qhat was one too large (the estimate is
		// off by at most one here). Add a single copy of v back; the final
		// carry out of the re-addition cancels the borrow and is dropped.
		if borrow != 0 {
			qhat -= 1;
			let mut carry = 0u32;
			for i in 0..n {
				let sum = u[j + i] as u32 + v[i] as u32 + carry;
				u[j + i] = (sum % BASE) as u8;
				carry = sum / BASE;
			}
			u[j + n] = ((u[j + n] as u32 + carry) % BASE) as u8;
		}

		quotient[j] = qhat as u8;
	}

	// D8: what is left in the low divisor-length window is the scaled
	// remainder; undo the D1 scaling. The quotient needs no unscaling.
	let (remainder, leftover) = div_rem_by_digit(&u[..n], d);
	debug_assert_eq!(leftover, 0, "scaled remainder must be divisible by the scaling factor");
	(Magnitude::from_digits(quotient), remainder)
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use proptest::prelude::*;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;

	fn digits_of(mut value: u128) -> Vec<u8> {
		let mut digits = vec![];
		loop {
			digits.push((value % BASE as u128) as u8);
			value /= BASE as u128;
			if value == 0 {
				break;
			}
		}
		digits
	}

	fn value_of(mag: &Magnitude) -> u128 {
		mag.digits()
			.iter()
			.rev()
			.fold(0u128, |acc, &digit| acc * BASE as u128 + digit as u128)
	}

	#[test]
	fn test_divide_by_zero() {
		assert_matches!(unsigned_div_rem(&[1, 2, 3], &[0]), Err(Error::DivisionByZero));
		assert_matches!(unsigned_div_rem(&[0], &[0]), Err(Error::DivisionByZero));
	}

	#[test]
	fn test_dividend_smaller_than_divisor() {
		let (q, r) = unsigned_div_rem(&[5], &[1, 1]).unwrap();
		assert!(q.is_zero());
		assert_eq!(r.digits(), [5]);
	}

	#[test]
	fn test_single_digit_divisor() {
		// 1000000 / 7 = 142857 r 1
		let dividend = [0, 0, 0, 0, 0, 0, 1];
		let (q, r) = unsigned_div_rem(&dividend, &[7]).unwrap();
		assert_eq!(value_of(&q), 142857);
		assert_eq!(value_of(&r), 1);
	}

	#[test]
	fn test_single_digit_divisor_exact() {
		// 123 / 3 = 41 r 0
		let (q, r) = unsigned_div_rem(&[3, 2, 1], &[3]).unwrap();
		assert_eq!(value_of(&q), 41);
		assert!(r.is_zero());
	}

	#[test]
	fn test_multi_digit_exact() {
		// 121932631112635269 / 987654321 = 123456789 r 0
		let dividend = digits_of(121932631112635269);
		let divisor = digits_of(987654321);
		let (q, r) = unsigned_div_rem(&dividend, &divisor).unwrap();
		assert_eq!(value_of(&q), 123456789);
		assert!(r.is_zero());
	}

	#[test]
	fn test_multi_digit_with_remainder() {
		let (q, r) = unsigned_div_rem(&digits_of(1_000_000_000_000), &digits_of(999_983)).unwrap();
		assert_eq!(value_of(&q), 1_000_000_000_000 / 999_983);
		assert_eq!(value_of(&r), 1_000_000_000_000 % 999_983);
	}

	#[test]
	fn test_equal_operands() {
		let digits = digits_of(987654321);
		let (q, r) = unsigned_div_rem(&digits, &digits).unwrap();
		assert_eq!(value_of(&q), 1);
		assert!(r.is_zero());
	}

	#[test]
	fn test_low_top_digit_divisor_needs_scaling() {
		// Top divisor digit 1 forces the largest scaling factor (d = 5).
		let (q, r) = unsigned_div_rem(&digits_of(98765), &digits_of(19)).unwrap();
		assert_eq!(value_of(&q), 98765 / 19);
		assert_eq!(value_of(&r), 98765 % 19);
	}

	#[test]
	fn test_trial_quotient_overestimate() {
		// 4100 / 59: the probe at the top position estimates qhat high and the
		// correction loop must pull it back before the subtraction.
		let (q, r) = unsigned_div_rem(&digits_of(4100), &digits_of(59)).unwrap();
		assert_eq!(value_of(&q), 4100 / 59);
		assert_eq!(value_of(&r), 4100 % 59);
	}

	#[test]
	fn test_interior_zero_quotient_digits() {
		// 100300500 / 100 = 1003005 r 0
		let (q, r) = unsigned_div_rem(&digits_of(100_300_500), &digits_of(100)).unwrap();
		assert_eq!(value_of(&q), 1_003_005);
		assert!(r.is_zero());
	}

	#[test]
	fn test_randomized_against_native() {
		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..10_000 {
			let a: u128 = rng.random_range(0..u64::MAX as u128 * u64::MAX as u128);
			let b: u128 = rng.random_range(1..u64::MAX as u128);
			let (q, r) = unsigned_div_rem(&digits_of(a), &digits_of(b)).unwrap();
			assert_eq!(value_of(&q), a / b, "quotient mismatch for {a} / {b}");
			assert_eq!(value_of(&r), a % b, "remainder mismatch for {a} / {b}");
		}
	}

	#[test]
	fn test_randomized_small_operands() {
		// Small operands exercise the short-circuit and fast paths densely.
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..10_000 {
			let a: u128 = rng.random_range(0..10_000);
			let b: u128 = rng.random_range(1..10_000);
			let (q, r) = unsigned_div_rem(&digits_of(a), &digits_of(b)).unwrap();
			assert_eq!(value_of(&q), a / b);
			assert_eq!(value_of(&r), a % b);
		}
	}

	proptest! {
		#[test]
		fn prop_div_rem_matches_native(a in any::<u128>(), b in 1..=u64::MAX as u128) {
			let (q, r) = unsigned_div_rem(&digits_of(a), &digits_of(b)).unwrap();
			prop_assert_eq!(value_of(&q), a / b);
			prop_assert_eq!(value_of(&r), a % b);
		}

		#[test]
		fn prop_remainder_smaller_than_divisor(a in any::<u128>(), b in 1..=u128::MAX) {
			let divisor = Magnitude::from_digits(digits_of(b));
			let (_, r) = unsigned_div_rem(&digits_of(a), divisor.digits()).unwrap();
			prop_assert!(r < divisor);
		}
	}
}
