// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_type::Value;
use serde::{Deserialize, Serialize};

/// A column whose every cell is undefined; only its length is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn push_default(&mut self) {
		self.len += 1;
	}

	pub fn is_defined(&self, _index: usize) -> bool {
		false
	}

	pub fn get_value(&self, _index: usize) -> Value {
		Value::Undefined
	}

	pub fn extend(&mut self, other: &Self) {
		self.len += other.len;
	}

	pub fn extend_from_undefined(&mut self, len: usize) {
		self.len += len;
	}
}
