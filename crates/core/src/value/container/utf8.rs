// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_type::Value;
use serde::{Deserialize, Serialize};

use crate::util::BitVec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: Vec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
		let len = data.len();
		Self {
			data,
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn push_default(&mut self) {
		self.push(String::new());
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.is_defined(index) {
			self.data.get(index).map(String::as_str)
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn data(&self) -> &Vec<String> {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(Value::utf8).unwrap_or(Value::Undefined)
	}

	pub fn extend(&mut self, other: &Self) {
		self.data.extend(other.data.iter().cloned());
		self.bitvec.extend(&other.bitvec);
	}

	pub fn extend_from_undefined(&mut self, len: usize) {
		for _ in 0..len {
			self.push_undefined();
		}
	}
}
