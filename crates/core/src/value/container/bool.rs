// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_type::Value;
use serde::{Deserialize, Serialize};

use crate::util::BitVec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<bool>) -> Self {
		let len = data.len();
		Self {
			data: BitVec::from(data),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	pub fn push_default(&mut self) {
		self.push(false);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(Value::Boolean).unwrap_or(Value::Undefined)
	}

	pub fn extend(&mut self, other: &Self) {
		self.data.extend(&other.data);
		self.bitvec.extend(&other.bitvec);
	}

	pub fn extend_from_undefined(&mut self, len: usize) {
		for _ in 0..len {
			self.push_undefined();
		}
	}
}
