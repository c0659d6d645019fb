// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_type::{error::diagnostic::query::column_type_mismatch, return_error};

use crate::value::column::data::{ColumnData, with_container};

impl ColumnData {
	/// Appends all cells of `other`. `name` is only used for the error when
	/// both sides hold different defined types.
	pub fn extend(&mut self, name: &str, other: ColumnData) -> crate::Result<()> {
		match (&mut *self, other) {
			(ColumnData::Bool(l), ColumnData::Bool(r)) => l.extend(&r),
			(ColumnData::Float4(l), ColumnData::Float4(r)) => l.extend(&r),
			(ColumnData::Float8(l), ColumnData::Float8(r)) => l.extend(&r),
			(ColumnData::Int1(l), ColumnData::Int1(r)) => l.extend(&r),
			(ColumnData::Int2(l), ColumnData::Int2(r)) => l.extend(&r),
			(ColumnData::Int4(l), ColumnData::Int4(r)) => l.extend(&r),
			(ColumnData::Int8(l), ColumnData::Int8(r)) => l.extend(&r),
			(ColumnData::Int16(l), ColumnData::Int16(r)) => l.extend(&r),
			(ColumnData::Utf8(l), ColumnData::Utf8(r)) => l.extend(&r),
			(ColumnData::Uint1(l), ColumnData::Uint1(r)) => l.extend(&r),
			(ColumnData::Uint2(l), ColumnData::Uint2(r)) => l.extend(&r),
			(ColumnData::Uint4(l), ColumnData::Uint4(r)) => l.extend(&r),
			(ColumnData::Uint8(l), ColumnData::Uint8(r)) => l.extend(&r),
			(ColumnData::Uint16(l), ColumnData::Uint16(r)) => l.extend(&r),
			(ColumnData::Undefined(l), ColumnData::Undefined(r)) => l.extend(&r),

			(l, ColumnData::Undefined(r)) => {
				with_container!(l, |c| c.extend_from_undefined(r.len()))
			}

			(ColumnData::Undefined(l), r) => {
				let mut promoted = ColumnData::with_capacity(r.get_type(), l.len() + r.len());
				with_container!(&mut promoted, |c| c.extend_from_undefined(l.len()));
				promoted.extend(name, r)?;
				*self = promoted;
			}

			(l, r) => {
				return_error!(column_type_mismatch(name, l.get_type(), r.get_type()));
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use gapfill_type::{Type, Value};

	use crate::value::column::ColumnData;

	#[test]
	fn test_extend_same_type() {
		let mut l = ColumnData::int8([1, 2]);
		l.extend("v", ColumnData::int8([3])).unwrap();
		assert_eq!(l.len(), 3);
		assert_eq!(l.get_value(2), Value::Int8(3));
	}

	#[test]
	fn test_extend_with_undefined() {
		let mut l = ColumnData::utf8(["a"]);
		l.extend("s", ColumnData::undefined(2)).unwrap();
		assert_eq!(l.get_type(), Type::Utf8);
		assert_eq!(l.len(), 3);
		assert!(!l.is_defined(2));
	}

	#[test]
	fn test_extend_undefined_promotes() {
		let mut l = ColumnData::undefined(1);
		l.extend("v", ColumnData::uint2([7])).unwrap();
		assert_eq!(l.get_type(), Type::Uint2);
		assert!(!l.is_defined(0));
		assert_eq!(l.get_value(1), Value::Uint2(7));
	}

	#[test]
	fn test_extend_type_mismatch() {
		let mut l = ColumnData::int4([1]);
		let err = l.extend("v", ColumnData::utf8(["x"])).unwrap_err();
		assert_eq!(err.code, "QUERY_003");
	}
}
