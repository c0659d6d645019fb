// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Deserializer, Serialize, de};

/// A non-NaN `f32` with a total order.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Serialize)]
pub struct OrderedF32(f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedFloatError;

impl Display for OrderedFloatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("NaN is not a valid ordered float")
	}
}

impl std::error::Error for OrderedFloatError {}

impl OrderedF32 {
	pub fn value(&self) -> f32 {
		self.0
	}

	pub fn zero() -> OrderedF32 {
		OrderedF32(0.0f32)
	}
}

impl Deref for OrderedF32 {
	type Target = f32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl PartialEq for OrderedF32 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl From<OrderedF32> for f32 {
	fn from(v: OrderedF32) -> Self {
		v.0
	}
}

impl TryFrom<f32> for OrderedF32 {
	type Error = OrderedFloatError;

	fn try_from(f: f32) -> Result<Self, Self::Error> {
		// -0.0 and 0.0 must compare and hash equal
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		if f.is_nan() {
			Err(OrderedFloatError)
		} else {
			Ok(OrderedF32(normalized))
		}
	}
}

impl<'de> Deserialize<'de> for OrderedF32 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let f = f32::deserialize(deserializer)?;
		OrderedF32::try_from(f).map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_negative_zero_is_zero() {
		assert_eq!(OrderedF32::try_from(-0.0f32).unwrap(), OrderedF32::zero());
	}

	#[test]
	fn test_ordering() {
		let a = OrderedF32::try_from(-1.5f32).unwrap();
		let b = OrderedF32::try_from(2.0f32).unwrap();
		assert!(a < b);
	}

	#[test]
	fn test_nan() {
		assert_eq!(OrderedF32::try_from(f32::NAN), Err(OrderedFloatError));
	}
}
