// Copyright 2025 Irreducible Inc.
//! Canonical unsigned digit-sequence representation.

use std::cmp::Ordering;

/// Radix of each stored digit. Every digit lies in `[0, BASE)`.
pub const BASE: u32 = 10;

/// The unsigned magnitude of a [`BigInt`](crate::BigInt).
///
/// Digits are stored least-significant first, so `digits[0]` is the ones place.
/// The sequence is canonical: it is never empty, and its most-significant (last)
/// digit is nonzero unless the value is exactly zero, which is the single digit
/// `[0]`. Canonical form makes length comparison meaningful and makes structural
/// equality coincide with numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
	digits: Vec<u8>,
}

impl Magnitude {
	/// The magnitude of zero, the single digit `[0]`.
	pub fn zero() -> Self {
		Self { digits: vec![0] }
	}

	/// The magnitude of one.
	pub fn one() -> Self {
		Self { digits: vec![1] }
	}

	/// Builds a canonical magnitude from an LSD-first digit sequence.
	///
	/// Strips non-essential most-significant zero digits down to at least one
	/// digit. All arithmetic engine outputs pass through here before being
	/// accepted as a magnitude.
	pub(crate) fn from_digits(mut digits: Vec<u8>) -> Self {
		debug_assert!(
			digits.iter().all(|&digit| (digit as u32) < BASE),
			"digit out of range for base {BASE}"
		);
		while digits.len() > 1 && digits.last() == Some(&0) {
			digits.pop();
		}
		if digits.is_empty() {
			digits.push(0);
		}
		Self { digits }
	}

	pub fn is_zero(&self) -> bool {
		self.digits == [0]
	}

	/// Number of digits in canonical form.
	pub fn len(&self) -> usize {
		self.digits.len()
	}

	/// The LSD-first digit sequence.
	pub fn digits(&self) -> &[u8] {
		&self.digits
	}

	/// The most-significant digit. Nonzero unless the magnitude is zero.
	pub fn top_digit(&self) -> u8 {
		self.digits[self.digits.len() - 1]
	}
}

impl Ord for Magnitude {
	/// Canonical form has no most-significant zeros, so a longer sequence is
	/// strictly larger; equal lengths compare digit-wise from the top.
	fn cmp(&self, other: &Self) -> Ordering {
		self.digits.len().cmp(&other.digits.len()).then_with(|| {
			for (lhs, rhs) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
				match lhs.cmp(rhs) {
					Ordering::Equal => {}
					unequal => return unequal,
				}
			}
			Ordering::Equal
		})
	}
}

impl PartialOrd for Magnitude {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
