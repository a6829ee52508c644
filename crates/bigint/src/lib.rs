// Copyright 2025 Irreducible Inc.

//! Arbitrary-precision signed integer arithmetic over a decimal magnitude.
//!
//! [`BigInt`] represents integers of unbounded size as a sign plus a canonical
//! base-10 digit sequence and supports exact addition, subtraction,
//! multiplication and division with remainder, total ordering, and lossless
//! decimal text round-tripping. Addition, subtraction and multiplication use
//! the schoolbook columnar algorithms; division is Knuth's multi-precision
//! Algorithm D with a single-digit fast path.

mod arith;
mod bigint;
mod divide;
mod error;
mod magnitude;

pub use bigint::BigInt;
pub use error::Error;
pub use magnitude::{BASE, Magnitude};
