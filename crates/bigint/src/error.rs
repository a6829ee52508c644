// Copyright 2025 Irreducible Inc.

/// Errors returned by fallible [`BigInt`](crate::BigInt) operations.
///
/// Only caller-facing failures are represented here. Violations of the internal
/// engine contracts (an unsigned subtraction whose left operand is smaller, a
/// digit outside the working base) are defects and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("string is not a valid decimal integer")]
	InvalidFormat,
	#[error("division by zero")]
	DivisionByZero,
}
