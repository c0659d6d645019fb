// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod extend;
mod push;

use gapfill_type::{Type, Value};
use serde::{Deserialize, Serialize};

use crate::value::container::{BoolContainer, NumberContainer, UndefinedContainer, Utf8Container};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Utf8(Utf8Container),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Undefined(UndefinedContainer),
}

macro_rules! with_container {
	($self:expr, |$c:ident| $body:expr) => {
		match $self {
			ColumnData::Bool($c) => $body,
			ColumnData::Float4($c) => $body,
			ColumnData::Float8($c) => $body,
			ColumnData::Int1($c) => $body,
			ColumnData::Int2($c) => $body,
			ColumnData::Int4($c) => $body,
			ColumnData::Int8($c) => $body,
			ColumnData::Int16($c) => $body,
			ColumnData::Utf8($c) => $body,
			ColumnData::Uint1($c) => $body,
			ColumnData::Uint2($c) => $body,
			ColumnData::Uint4($c) => $body,
			ColumnData::Uint8($c) => $body,
			ColumnData::Uint16($c) => $body,
			ColumnData::Undefined($c) => $body,
		}
	};
}

pub(crate) use with_container;

impl ColumnData {
	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(data.into_iter().collect()))
	}

	pub fn float4(data: impl IntoIterator<Item = f32>) -> Self {
		ColumnData::Float4(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn float8(data: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int1(data: impl IntoIterator<Item = i8>) -> Self {
		ColumnData::Int1(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int2(data: impl IntoIterator<Item = i16>) -> Self {
		ColumnData::Int2(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int4(data: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int8(data: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int16(data: impl IntoIterator<Item = i128>) -> Self {
		ColumnData::Int16(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn utf8<'a>(data: impl IntoIterator<Item = &'a str>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(data.into_iter().map(str::to_string).collect()))
	}

	pub fn uint1(data: impl IntoIterator<Item = u8>) -> Self {
		ColumnData::Uint1(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint2(data: impl IntoIterator<Item = u16>) -> Self {
		ColumnData::Uint2(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint4(data: impl IntoIterator<Item = u32>) -> Self {
		ColumnData::Uint4(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint8(data: impl IntoIterator<Item = u64>) -> Self {
		ColumnData::Uint8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint16(data: impl IntoIterator<Item = u128>) -> Self {
		ColumnData::Uint16(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	/// An empty column of `ty` with room for `capacity` cells.
	pub fn with_capacity(ty: Type, capacity: usize) -> Self {
		match ty {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, |c| c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		with_container!(self, |c| c.is_defined(index))
	}

	/// The value at `index`; undefined cells and out of range indexes yield
	/// [`Value::Undefined`].
	pub fn get_value(&self, index: usize) -> Value {
		with_container!(self, |c| c.get_value(index))
	}
}
