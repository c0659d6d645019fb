// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use gapfill_type::{Type, Value};
use serde::{Deserialize, Serialize};

use crate::util::BitVec;

/// Native numeric types a [`NumberContainer`] can hold.
pub trait IsNumber: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
	const TYPE: Type;

	fn into_value(self) -> Value;

	fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_is_number {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl IsNumber for $t {
				const TYPE: Type = Type::$variant;

				fn into_value(self) -> Value {
					Value::$variant(self)
				}

				fn from_value(value: &Value) -> Option<Self> {
					match value {
						Value::$variant(v) => Some(*v),
						_ => None,
					}
				}
			}
		)*
	};
}

impl_is_number!(
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
);

impl IsNumber for f32 {
	const TYPE: Type = Type::Float4;

	fn into_value(self) -> Value {
		Value::float4(self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Float4(v) => Some(v.value()),
			_ => None,
		}
	}
}

impl IsNumber for f64 {
	const TYPE: Type = Type::Float8;

	fn into_value(self) -> Value {
		Value::float8(self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Float8(v) => Some(v.value()),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T: IsNumber> {
	data: Vec<T>,
	bitvec: BitVec,
}

impl<T: IsNumber> NumberContainer<T> {
	pub fn new(data: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let len = data.len();
		Self {
			data,
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	pub fn push_default(&mut self) {
		self.push(T::default());
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if index < self.len() && self.bitvec.get(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.all_ones()
	}

	pub fn data(&self) -> &Vec<T> {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(|v| v.into_value()).unwrap_or(Value::Undefined)
	}

	pub fn extend(&mut self, other: &Self) {
		self.data.extend_from_slice(&other.data);
		self.bitvec.extend(&other.bitvec);
	}

	pub fn extend_from_undefined(&mut self, len: usize) {
		for _ in 0..len {
			self.push_undefined();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut c = NumberContainer::<i32>::with_capacity(2);
		c.push(7);
		c.push_undefined();
		c.push_default();

		assert_eq!(c.len(), 3);
		assert_eq!(c.get(0), Some(&7));
		assert_eq!(c.get(1), None);
		assert_eq!(c.get(2), Some(&0));
		assert!(!c.is_fully_defined());
		assert_eq!(c.get_value(1), Value::Undefined);
		assert_eq!(c.get_value(2), Value::Int4(0));
	}

	#[test]
	fn test_extend() {
		let mut l = NumberContainer::from_vec(vec![1u8, 2]);
		let mut r = NumberContainer::<u8>::with_capacity(1);
		r.push_undefined();
		l.extend(&r);
		l.extend_from_undefined(1);

		assert_eq!(l.data(), &vec![1, 2, 0, 0]);
		assert!(l.is_defined(1));
		assert!(!l.is_defined(2));
		assert!(!l.is_defined(3));
		assert!(!l.is_defined(4));
	}

	#[test]
	fn test_float_value() {
		let c = NumberContainer::from_vec(vec![1.5f64]);
		assert_eq!(c.get_value(0), Value::float8(1.5));
		assert_eq!(f64::from_value(&Value::float8(2.0)), Some(2.0));
		assert_eq!(f64::from_value(&Value::Int4(2)), None);
	}
}
