// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_type::Value;

use crate::value::column::data::{ColumnData, with_container};

impl ColumnData {
	pub fn push_undefined(&mut self) {
		with_container!(self, |c| c.push_undefined())
	}

	/// Appends the zero value of the column type: `0`, `false` or the empty
	/// string.
	pub fn push_default(&mut self) {
		with_container!(self, |c| c.push_default())
	}

	/// Appends `value`, converting numbers into the column type.
	///
	/// An all-undefined column adopts the type of the first defined value.
	/// Values that cannot be represented in the column type are appended as
	/// undefined.
	pub fn push_value(&mut self, value: Value) {
		if value.is_undefined() {
			self.push_undefined();
			return;
		}

		if let ColumnData::Undefined(container) = self {
			let mut promoted = ColumnData::with_capacity(value.get_type(), container.len() + 1);
			for _ in 0..container.len() {
				promoted.push_undefined();
			}
			*self = promoted;
		}

		let ty = self.get_type();
		let value = if value.get_type() == ty {
			value
		} else {
			match value.convert_to(ty) {
				Some(converted) => converted,
				None => {
					self.push_undefined();
					return;
				}
			}
		};

		match (&mut *self, value) {
			(ColumnData::Bool(c), Value::Boolean(v)) => c.push(v),
			(ColumnData::Float4(c), Value::Float4(v)) => c.push(v.value()),
			(ColumnData::Float8(c), Value::Float8(v)) => c.push(v.value()),
			(ColumnData::Int1(c), Value::Int1(v)) => c.push(v),
			(ColumnData::Int2(c), Value::Int2(v)) => c.push(v),
			(ColumnData::Int4(c), Value::Int4(v)) => c.push(v),
			(ColumnData::Int8(c), Value::Int8(v)) => c.push(v),
			(ColumnData::Int16(c), Value::Int16(v)) => c.push(v),
			(ColumnData::Utf8(c), Value::Utf8(v)) => c.push(v),
			(ColumnData::Uint1(c), Value::Uint1(v)) => c.push(v),
			(ColumnData::Uint2(c), Value::Uint2(v)) => c.push(v),
			(ColumnData::Uint4(c), Value::Uint4(v)) => c.push(v),
			(ColumnData::Uint8(c), Value::Uint8(v)) => c.push(v),
			(ColumnData::Uint16(c), Value::Uint16(v)) => c.push(v),
			(data, _) => data.push_undefined(),
		}
	}
}
