// Copyright 2025 Irreducible Inc.
//! Signed arbitrary-precision integer built on an unsigned decimal magnitude.

use std::{
	cmp::Ordering,
	fmt,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	str::FromStr,
};

use crate::{
	arith::{unsigned_add, unsigned_mul, unsigned_sub},
	divide::unsigned_div_rem,
	error::Error,
	magnitude::{BASE, Magnitude},
};

/// Arbitrary-precision signed integer.
///
/// Stored as a sign-and-magnitude pair rather than a complement encoding, which
/// keeps the sign-combination cases of each arithmetic operation explicit. The
/// invariant is that zero is never negative, so structural equality coincides
/// with numeric equality and `-0` cannot be constructed.
///
/// Values are immutable: every arithmetic operation allocates a fresh result,
/// and the compound-assignment operators are defined as "assign the result of
/// the corresponding binary operation".
///
/// ```
/// use std::str::FromStr;
///
/// use bigint::BigInt;
///
/// let a = BigInt::from_str("123456789")?;
/// let b = BigInt::from_str("987654321")?;
/// assert_eq!((&a * &b).to_string(), "121932631112635269");
/// # Ok::<(), bigint::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
	magnitude: Magnitude,
	negative: bool,
}

impl BigInt {
	pub fn zero() -> Self {
		Self {
			magnitude: Magnitude::zero(),
			negative: false,
		}
	}

	pub fn one() -> Self {
		Self {
			magnitude: Magnitude::one(),
			negative: false,
		}
	}

	/// Composes a value from a canonical magnitude and a sign, clearing the
	/// sign when the magnitude is zero.
	pub(crate) fn from_sign_magnitude(magnitude: Magnitude, negative: bool) -> Self {
		let negative = negative && !magnitude.is_zero();
		Self {
			magnitude,
			negative,
		}
	}

	pub fn is_zero(&self) -> bool {
		self.magnitude.is_zero()
	}

	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// The unsigned magnitude of this value.
	pub fn magnitude(&self) -> &Magnitude {
		&self.magnitude
	}

	/// The absolute value.
	pub fn abs(&self) -> Self {
		Self::from_sign_magnitude(self.magnitude.clone(), false)
	}

	/// `-1`, `0` or `1` according to the sign of this value.
	pub fn signum(&self) -> i32 {
		if self.is_zero() {
			0
		} else if self.negative {
			-1
		} else {
			1
		}
	}

	/// Divides `self` by `rhs`, returning `(quotient, remainder)`.
	///
	/// The quotient truncates toward zero and the remainder takes the sign of
	/// the dividend, so `q * rhs + r == self` and `|r| < |rhs|` always hold.
	/// This is the recoverable division surface; the `/` and `%` operators
	/// panic on a zero divisor instead.
	pub fn checked_div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
		let (quotient, remainder) =
			unsigned_div_rem(self.magnitude.digits(), rhs.magnitude.digits())?;
		let quotient = Self::from_sign_magnitude(quotient, self.negative != rhs.negative);
		let remainder = Self::from_sign_magnitude(remainder, self.negative);
		Ok((quotient, remainder))
	}

	/// `self = self + 1`.
	pub fn increment(&mut self) {
		*self = &*self + &Self::one();
	}

	/// `self = self - 1`.
	pub fn decrement(&mut self) {
		*self = &*self - &Self::one();
	}
}

/// Signed addition per the sign-combination table: equal signs add magnitudes
/// and keep the shared sign; mixed signs reduce to a magnitude subtraction of
/// the smaller from the larger, the result taking the sign of the operand with
/// the larger magnitude.
fn signed_add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
	if lhs.negative == rhs.negative {
		let sum = unsigned_add(lhs.magnitude.digits(), rhs.magnitude.digits());
		BigInt::from_sign_magnitude(sum, lhs.negative)
	} else {
		match lhs.magnitude.cmp(&rhs.magnitude) {
			Ordering::Equal => BigInt::zero(),
			Ordering::Greater => BigInt::from_sign_magnitude(
				unsigned_sub(lhs.magnitude.digits(), rhs.magnitude.digits()),
				lhs.negative,
			),
			Ordering::Less => BigInt::from_sign_magnitude(
				unsigned_sub(rhs.magnitude.digits(), lhs.magnitude.digits()),
				rhs.negative,
			),
		}
	}
}

impl Add<&BigInt> for &BigInt {
	type Output = BigInt;

	fn add(self, rhs: &BigInt) -> BigInt {
		signed_add(self, rhs)
	}
}

impl Add for BigInt {
	type Output = BigInt;

	fn add(self, rhs: BigInt) -> BigInt {
		&self + &rhs
	}
}

impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;

	fn sub(self, rhs: &BigInt) -> BigInt {
		// a - b = a + (-b); negation reuses the mixed-sign addition cases.
		self + &-rhs
	}
}

impl Sub for BigInt {
	type Output = BigInt;

	fn sub(self, rhs: BigInt) -> BigInt {
		&self - &rhs
	}
}

impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;

	fn mul(self, rhs: &BigInt) -> BigInt {
		let product = unsigned_mul(self.magnitude.digits(), rhs.magnitude.digits());
		BigInt::from_sign_magnitude(product, self.negative != rhs.negative)
	}
}

impl Mul for BigInt {
	type Output = BigInt;

	fn mul(self, rhs: BigInt) -> BigInt {
		&self * &rhs
	}
}

impl Div<&BigInt> for &BigInt {
	type Output = BigInt;

	/// ## Panics
	///
	/// Panics if `rhs` is zero; use [`BigInt::checked_div_rem`] to recover.
	fn div(self, rhs: &BigInt) -> BigInt {
		match self.checked_div_rem(rhs) {
			Ok((quotient, _)) => quotient,
			Err(_) => panic!("attempt to divide by zero"),
		}
	}
}

impl Div for BigInt {
	type Output = BigInt;

	fn div(self, rhs: BigInt) -> BigInt {
		&self / &rhs
	}
}

impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;

	/// ## Panics
	///
	/// Panics if `rhs` is zero; use [`BigInt::checked_div_rem`] to recover.
	fn rem(self, rhs: &BigInt) -> BigInt {
		match self.checked_div_rem(rhs) {
			Ok((_, remainder)) => remainder,
			Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
		}
	}
}

impl Rem for BigInt {
	type Output = BigInt;

	fn rem(self, rhs: BigInt) -> BigInt {
		&self % &rhs
	}
}

impl Neg for &BigInt {
	type Output = BigInt;

	fn neg(self) -> BigInt {
		BigInt::from_sign_magnitude(self.magnitude.clone(), !self.negative)
	}
}

impl Neg for BigInt {
	type Output = BigInt;

	fn neg(self) -> BigInt {
		let negative = !self.negative;
		BigInt::from_sign_magnitude(self.magnitude, negative)
	}
}

impl AddAssign<&BigInt> for BigInt {
	fn add_assign(&mut self, rhs: &BigInt) {
		*self = &*self + rhs;
	}
}

impl AddAssign for BigInt {
	fn add_assign(&mut self, rhs: BigInt) {
		*self = &*self + &rhs;
	}
}

impl SubAssign<&BigInt> for BigInt {
	fn sub_assign(&mut self, rhs: &BigInt) {
		*self = &*self - rhs;
	}
}

impl SubAssign for BigInt {
	fn sub_assign(&mut self, rhs: BigInt) {
		*self = &*self - &rhs;
	}
}

impl MulAssign<&BigInt> for BigInt {
	fn mul_assign(&mut self, rhs: &BigInt) {
		*self = &*self * rhs;
	}
}

impl MulAssign for BigInt {
	fn mul_assign(&mut self, rhs: BigInt) {
		*self = &*self * &rhs;
	}
}

impl DivAssign<&BigInt> for BigInt {
	fn div_assign(&mut self, rhs: &BigInt) {
		*self = &*self / rhs;
	}
}

impl DivAssign for BigInt {
	fn div_assign(&mut self, rhs: BigInt) {
		*self = &*self / &rhs;
	}
}

impl RemAssign<&BigInt> for BigInt {
	fn rem_assign(&mut self, rhs: &BigInt) {
		*self = &*self % rhs;
	}
}

impl RemAssign for BigInt {
	fn rem_assign(&mut self, rhs: BigInt) {
		*self = &*self % &rhs;
	}
}

impl Ord for BigInt {
	/// Sign first; equal signs compare magnitudes, with the order reversed
	/// when both values are negative.
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.negative, other.negative) {
			(false, true) => Ordering::Greater,
			(true, false) => Ordering::Less,
			(false, false) => self.magnitude.cmp(&other.magnitude),
			(true, true) => other.magnitude.cmp(&self.magnitude),
		}
	}
}

impl PartialOrd for BigInt {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Default for BigInt {
	fn default() -> Self {
		Self::zero()
	}
}

impl FromStr for BigInt {
	type Err = Error;

	/// Parses an optional leading `-` followed by one or more ASCII digits.
	/// Leading zeros are accepted and normalized away; `-0` parses to zero.
	fn from_str(s: &str) -> Result<Self, Error> {
		let (negative, ascii) = match s.as_bytes() {
			[] | [b'-'] => return Err(Error::InvalidFormat),
			[b'-', rest @ ..] => (true, rest),
			all => (false, all),
		};
		let mut digits = Vec::with_capacity(ascii.len());
		for &byte in ascii.iter().rev() {
			if !byte.is_ascii_digit() {
				return Err(Error::InvalidFormat);
			}
			digits.push(byte - b'0');
		}
		Ok(Self::from_sign_magnitude(Magnitude::from_digits(digits), negative))
	}
}

impl fmt::Display for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.negative {
			f.write_str("-")?;
		}
		for &digit in self.magnitude.digits().iter().rev() {
			write!(f, "{digit}")?;
		}
		Ok(())
	}
}

impl fmt::Debug for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BigInt({self})")
	}
}

fn magnitude_of(mut value: u128) -> Magnitude {
	let mut digits = vec![];
	loop {
		digits.push((value % BASE as u128) as u8);
		value /= BASE as u128;
		if value == 0 {
			break;
		}
	}
	Magnitude::from_digits(digits)
}

macro_rules! impl_from_signed {
	($($ty:ty),*) => {$(
		impl From<$ty> for BigInt {
			fn from(value: $ty) -> Self {
				Self::from_sign_magnitude(magnitude_of(value.unsigned_abs() as u128), value < 0)
			}
		}
	)*};
}

macro_rules! impl_from_unsigned {
	($($ty:ty),*) => {$(
		impl From<$ty> for BigInt {
			fn from(value: $ty) -> Self {
				Self::from_sign_magnitude(magnitude_of(value as u128), false)
			}
		}
	)*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
