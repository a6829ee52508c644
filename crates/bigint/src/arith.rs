// Copyright 2025 Irreducible Inc.
//! Schoolbook addition, subtraction and multiplication on unsigned magnitudes.
//!
//! The routines in this module operate on raw LSD-first digit slices and return
//! canonical [`Magnitude`] values. Sign handling lives entirely in the
//! [`BigInt`](crate::BigInt) layer; every slice handed in here is treated as a
//! non-negative integer.

use itertools::{EitherOrBoth, Itertools};

use crate::magnitude::{BASE, Magnitude};

/// Columnar addition of two digit sequences.
///
/// Operands may have different lengths. A single carry in `[0, BASE)` is
/// propagated column by column; a final nonzero carry becomes a new
/// most-significant digit.
pub(crate) fn unsigned_add(lhs: &[u8], rhs: &[u8]) -> Magnitude {
	let mut digits = Vec::with_capacity(lhs.len().max(rhs.len()) + 1);
	let mut carry = 0u32;
	for column in lhs.iter().zip_longest(rhs.iter()) {
		let (a, b) = match column {
			EitherOrBoth::Both(&a, &b) => (a as u32, b as u32),
			EitherOrBoth::Left(&a) => (a as u32, 0),
			EitherOrBoth::Right(&b) => (0, b as u32),
		};
		let sum = a + b + carry;
		digits.push((sum % BASE) as u8);
		carry = sum / BASE;
	}
	if carry != 0 {
		digits.push(carry as u8);
	}
	Magnitude::from_digits(digits)
}

/// Columnar subtraction of two digit sequences.
///
/// Requires `lhs >= rhs` as magnitudes; the signed layer guarantees this by
/// always subtracting the smaller magnitude from the larger. Each column
/// computes the digit difference modulo `BASE` (true mathematical modulo, so a
/// raw difference of `-1` yields digit `9` and a borrow of one).
///
/// ## Panics
///
/// Panics if a borrow survives the final column, which means the caller broke
/// the `lhs >= rhs` contract.
pub(crate) fn unsigned_sub(lhs: &[u8], rhs: &[u8]) -> Magnitude {
	let mut digits = Vec::with_capacity(lhs.len());
	let mut borrow = 0i32;
	for column in lhs.iter().zip_longest(rhs.iter()) {
		let (a, b) = match column {
			EitherOrBoth::Both(&a, &b) => (a as i32, b as i32),
			EitherOrBoth::Left(&a) => (a as i32, 0),
			EitherOrBoth::Right(&b) => (0, b as i32),
		};
		let mut diff = a - b - borrow;
		borrow = if diff < 0 {
			diff += BASE as i32;
			1
		} else {
			0
		};
		digits.push(diff as u8);
	}
	assert_eq!(borrow, 0, "unsigned subtraction underflow: lhs magnitude smaller than rhs");
	Magnitude::from_digits(digits)
}

/// Schoolbook `O(n * m)` multiplication of two digit sequences.
///
/// Accumulates partial products into a zeroed `lhs.len() + rhs.len()` buffer.
/// Each slot can receive contributions from several `(i, j)` digit pairs across
/// different sweeps, so the running value folds in the slot's current contents
/// as well as the carry before splitting off the new digit.
pub(crate) fn unsigned_mul(lhs: &[u8], rhs: &[u8]) -> Magnitude {
	let mut digits = vec![0u8; lhs.len() + rhs.len()];
	for (j, &b) in rhs.iter().enumerate() {
		let mut carry = 0u32;
		for (i, &a) in lhs.iter().enumerate() {
			let value = a as u32 * b as u32 + digits[i + j] as u32 + carry;
			digits[i + j] = (value % BASE) as u8;
			carry = value / BASE;
		}
		digits[lhs.len() + j] = carry as u8;
	}
	// The top slot is frequently zero, e.g. 2 * 3.
	Magnitude::from_digits(digits)
}
