// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A growable vector of bits, packed eight to a byte.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut bits = vec![fill; len.div_ceil(8)];
		// keep the unused tail of the last byte cleared
		if value && len % 8 != 0 {
			if let Some(last) = bits.last_mut() {
				*last = (1u8 << (len % 8)) - 1;
			}
		}
		Self {
			bits,
			len,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		Self::new(len, value)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push(&mut self, bit: bool) {
		let byte = self.len / 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if bit {
			self.bits[byte] |= 1 << (self.len % 8);
		}
		self.len += 1;
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.len, "bit index {idx} out of bounds for length {}", self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, bit: bool) {
		assert!(idx < self.len, "bit index {idx} out of bounds for length {}", self.len);
		let mask = 1 << (idx % 8);
		if bit {
			self.bits[idx / 8] |= mask;
		} else {
			self.bits[idx / 8] &= !mask;
		}
	}

	pub fn extend(&mut self, other: &BitVec) {
		for idx in 0..other.len() {
			self.push(other.get(idx));
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn all_ones(&self) -> bool {
		self.count_ones() == self.len
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(|idx| self.get(idx))
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let s: String = self
			.iter()
			.map(|b| {
				if b {
					'1'
				} else {
					'0'
				}
			})
			.collect();
		write!(f, "BitVec[{s}]")
	}
}

impl From<Vec<bool>> for BitVec {
	fn from(value: Vec<bool>) -> Self {
		let mut result = BitVec::with_capacity(value.len());
		for bit in value {
			result.push(bit);
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new() {
		let bv = BitVec::new(10, true);
		assert_eq!(bv.len(), 10);
		assert!(bv.iter().all(|b| b));
		assert_eq!(bv.count_ones(), 10);

		let bv = BitVec::new(3, false);
		assert_eq!(bv.count_ones(), 0);
		assert!(!bv.all_ones());
	}

	#[test]
	fn test_push_get() {
		let mut bv = BitVec::with_capacity(4);
		assert!(bv.is_empty());
		for i in 0..20 {
			bv.push(i % 3 == 0);
		}
		assert_eq!(bv.len(), 20);
		for i in 0..20 {
			assert_eq!(bv.get(i), i % 3 == 0, "bit {i}");
		}
	}

	#[test]
	fn test_set() {
		let mut bv = BitVec::new(9, false);
		bv.set(8, true);
		bv.set(0, true);
		bv.set(0, false);
		assert!(!bv.get(0));
		assert!(bv.get(8));
		assert_eq!(bv.count_ones(), 1);
	}

	#[test]
	fn test_extend() {
		let mut l = BitVec::from(vec![true, false, true]);
		let r = BitVec::from(vec![false, true]);
		l.extend(&r);
		assert_eq!(l.iter().collect::<Vec<_>>(), vec![true, false, true, false, true]);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn test_get_out_of_bounds() {
		BitVec::new(2, true).get(2);
	}
}
