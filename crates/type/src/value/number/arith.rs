// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{
	OrderedF32, OrderedF64, Value,
	number::{SafeAdd, SafeSub},
	r#type::Type,
};

macro_rules! checked {
	($l:expr, $r:expr, $trait:ident :: $op:ident) => {
		match ($l, $r) {
			(Value::Int1(l), Value::Int1(r)) => $trait::$op(*l, *r).map(Value::Int1),
			(Value::Int2(l), Value::Int2(r)) => $trait::$op(*l, *r).map(Value::Int2),
			(Value::Int4(l), Value::Int4(r)) => $trait::$op(*l, *r).map(Value::Int4),
			(Value::Int8(l), Value::Int8(r)) => $trait::$op(*l, *r).map(Value::Int8),
			(Value::Int16(l), Value::Int16(r)) => $trait::$op(*l, *r).map(Value::Int16),
			(Value::Uint1(l), Value::Uint1(r)) => $trait::$op(*l, *r).map(Value::Uint1),
			(Value::Uint2(l), Value::Uint2(r)) => $trait::$op(*l, *r).map(Value::Uint2),
			(Value::Uint4(l), Value::Uint4(r)) => $trait::$op(*l, *r).map(Value::Uint4),
			(Value::Uint8(l), Value::Uint8(r)) => $trait::$op(*l, *r).map(Value::Uint8),
			(Value::Uint16(l), Value::Uint16(r)) => $trait::$op(*l, *r).map(Value::Uint16),
			(Value::Float4(l), Value::Float4(r)) => $trait::$op(l.value(), r.value())
				.and_then(|v| OrderedF32::try_from(v).ok())
				.map(Value::Float4),
			(Value::Float8(l), Value::Float8(r)) => $trait::$op(l.value(), r.value())
				.and_then(|v| OrderedF64::try_from(v).ok())
				.map(Value::Float8),
			_ => None,
		}
	};
}

impl Value {
	/// Adds two numbers of the same type. `None` on overflow, on a
	/// non-finite float result or when the operands differ in type.
	pub fn checked_add(&self, other: &Value) -> Option<Value> {
		checked!(self, other, SafeAdd::checked_add)
	}

	/// Subtracts two numbers of the same type, see [`Value::checked_add`].
	pub fn checked_sub(&self, other: &Value) -> Option<Value> {
		checked!(self, other, SafeSub::checked_sub)
	}

	pub fn is_negative(&self) -> bool {
		match self {
			Value::Int1(v) => *v < 0,
			Value::Int2(v) => *v < 0,
			Value::Int4(v) => *v < 0,
			Value::Int8(v) => *v < 0,
			Value::Int16(v) => *v < 0,
			Value::Float4(v) => v.value() < 0.0,
			Value::Float8(v) => v.value() < 0.0,
			_ => false,
		}
	}

	pub fn is_zero(&self) -> bool {
		match self {
			Value::Int1(v) => *v == 0,
			Value::Int2(v) => *v == 0,
			Value::Int4(v) => *v == 0,
			Value::Int8(v) => *v == 0,
			Value::Int16(v) => *v == 0,
			Value::Uint1(v) => *v == 0,
			Value::Uint2(v) => *v == 0,
			Value::Uint4(v) => *v == 0,
			Value::Uint8(v) => *v == 0,
			Value::Uint16(v) => *v == 0,
			Value::Float4(v) => v.value() == 0.0,
			Value::Float8(v) => v.value() == 0.0,
			_ => false,
		}
	}

	/// The unit step of a numeric type.
	pub fn one(ty: Type) -> Option<Value> {
		match ty {
			Type::Int1 => Some(Value::Int1(1)),
			Type::Int2 => Some(Value::Int2(1)),
			Type::Int4 => Some(Value::Int4(1)),
			Type::Int8 => Some(Value::Int8(1)),
			Type::Int16 => Some(Value::Int16(1)),
			Type::Uint1 => Some(Value::Uint1(1)),
			Type::Uint2 => Some(Value::Uint2(1)),
			Type::Uint4 => Some(Value::Uint4(1)),
			Type::Uint8 => Some(Value::Uint8(1)),
			Type::Uint16 => Some(Value::Uint16(1)),
			Type::Float4 => Some(Value::float4(1.0f32)),
			Type::Float8 => Some(Value::float8(1.0f64)),
			Type::Boolean | Type::Utf8 | Type::Undefined => None,
		}
	}
}
