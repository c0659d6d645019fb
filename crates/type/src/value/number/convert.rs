// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{Value, r#type::Type};

/// Widest lossless view of a numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
	Signed(i128),
	Unsigned(u128),
	Float(f64),
}

impl Number {
	fn from_value(value: &Value) -> Option<Number> {
		match value {
			Value::Int1(v) => Some(Number::Signed(*v as i128)),
			Value::Int2(v) => Some(Number::Signed(*v as i128)),
			Value::Int4(v) => Some(Number::Signed(*v as i128)),
			Value::Int8(v) => Some(Number::Signed(*v as i128)),
			Value::Int16(v) => Some(Number::Signed(*v)),
			Value::Uint1(v) => Some(Number::Unsigned(*v as u128)),
			Value::Uint2(v) => Some(Number::Unsigned(*v as u128)),
			Value::Uint4(v) => Some(Number::Unsigned(*v as u128)),
			Value::Uint8(v) => Some(Number::Unsigned(*v as u128)),
			Value::Uint16(v) => Some(Number::Unsigned(*v)),
			Value::Float4(v) => Some(Number::Float(v.value() as f64)),
			Value::Float8(v) => Some(Number::Float(v.value())),
			_ => None,
		}
	}

	fn to_i128(self) -> Option<i128> {
		match self {
			Number::Signed(v) => Some(v),
			Number::Unsigned(v) => i128::try_from(v).ok(),
			Number::Float(v) => {
				// only integral floats inside the i128 range convert exactly
				if v.fract() == 0.0 && v >= i128::MIN as f64 && v < i128::MAX as f64 {
					Some(v as i128)
				} else {
					None
				}
			}
		}
	}

	fn to_u128(self) -> Option<u128> {
		match self {
			Number::Signed(v) => u128::try_from(v).ok(),
			Number::Unsigned(v) => Some(v),
			Number::Float(v) => {
				if v.fract() == 0.0 && v >= 0.0 && v < u128::MAX as f64 {
					Some(v as u128)
				} else {
					None
				}
			}
		}
	}

	fn to_f64(self) -> Option<f64> {
		// the upper bound check rejects casts that saturate on the way back
		match self {
			Number::Signed(v) => {
				let f = v as f64;
				(f < i128::MAX as f64 && f as i128 == v).then_some(f)
			}
			Number::Unsigned(v) => {
				let f = v as f64;
				(f < u128::MAX as f64 && f as u128 == v).then_some(f)
			}
			Number::Float(v) => v.is_finite().then_some(v),
		}
	}

	fn to_f32(self) -> Option<f32> {
		match self {
			Number::Signed(v) => {
				let f = v as f32;
				(f < i128::MAX as f32 && f as i128 == v).then_some(f)
			}
			Number::Unsigned(v) => {
				let f = v as f32;
				(f.is_finite() && f as u128 == v).then_some(f)
			}
			Number::Float(v) => {
				let f = v as f32;
				(f.is_finite() && f as f64 == v).then_some(f)
			}
		}
	}
}

impl Value {
	/// Converts a numeric value into `target`.
	///
	/// Integer targets only accept values that fit exactly; a negative value
	/// never converts into an unsigned type and a fractional float never
	/// converts into an integer. Float targets only accept values the float
	/// type represents exactly.
	/// Returns `None` for non-numeric values or targets.
	pub fn convert_to(&self, target: Type) -> Option<Value> {
		let number = Number::from_value(self)?;
		match target {
			Type::Int1 => number.to_i128().and_then(|v| i8::try_from(v).ok()).map(Value::Int1),
			Type::Int2 => number.to_i128().and_then(|v| i16::try_from(v).ok()).map(Value::Int2),
			Type::Int4 => number.to_i128().and_then(|v| i32::try_from(v).ok()).map(Value::Int4),
			Type::Int8 => number.to_i128().and_then(|v| i64::try_from(v).ok()).map(Value::Int8),
			Type::Int16 => number.to_i128().map(Value::Int16),
			Type::Uint1 => number.to_u128().and_then(|v| u8::try_from(v).ok()).map(Value::Uint1),
			Type::Uint2 => number.to_u128().and_then(|v| u16::try_from(v).ok()).map(Value::Uint2),
			Type::Uint4 => number.to_u128().and_then(|v| u32::try_from(v).ok()).map(Value::Uint4),
			Type::Uint8 => number.to_u128().and_then(|v| u64::try_from(v).ok()).map(Value::Uint8),
			Type::Uint16 => number.to_u128().map(Value::Uint16),
			Type::Float4 => number.to_f32().map(Value::float4),
			Type::Float8 => number.to_f64().map(Value::float8),
			Type::Boolean | Type::Utf8 | Type::Undefined => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_widen_unsigned_to_signed() {
		assert_eq!(Value::Uint8(5).convert_to(Type::Int8), Some(Value::Int8(5)));
		assert_eq!(Value::Uint1(200).convert_to(Type::Int2), Some(Value::Int2(200)));
	}

	#[test]
	fn test_negative_into_unsigned() {
		assert_eq!(Value::Int8(-1).convert_to(Type::Uint4), None);
		assert_eq!(Value::Int8(0).convert_to(Type::Uint4), Some(Value::Uint4(0)));
	}

	#[test]
	fn test_out_of_range() {
		assert_eq!(Value::Uint8(256).convert_to(Type::Uint1), None);
		assert_eq!(Value::Int4(-129).convert_to(Type::Int1), None);
		assert_eq!(Value::Uint16(u128::MAX).convert_to(Type::Int16), None);
	}

	#[test]
	fn test_float_into_integer() {
		assert_eq!(Value::float8(3.0).convert_to(Type::Int4), Some(Value::Int4(3)));
		assert_eq!(Value::float8(3.5).convert_to(Type::Int4), None);
		assert_eq!(Value::float8(-2.0).convert_to(Type::Uint2), None);
	}

	#[test]
	fn test_integer_into_float() {
		assert_eq!(Value::Int4(7).convert_to(Type::Float8), Some(Value::float8(7.0)));
		assert_eq!(Value::Uint8(2).convert_to(Type::Float4), Some(Value::float4(2.0)));
		assert_eq!(Value::Int4(16_777_216).convert_to(Type::Float4), Some(Value::float4(16_777_216.0)));
	}

	#[test]
	fn test_inexact_into_float() {
		assert_eq!(Value::Int4(16_777_217).convert_to(Type::Float4), None);
		assert_eq!(Value::Int8((1 << 53) + 1).convert_to(Type::Float8), None);
		assert_eq!(Value::Uint16(u128::MAX).convert_to(Type::Float8), None);
		assert_eq!(Value::Int16(i128::MAX).convert_to(Type::Float4), None);
	}

	#[test]
	fn test_narrow_float() {
		assert_eq!(Value::float8(0.5).convert_to(Type::Float4), Some(Value::float4(0.5)));
		assert_eq!(Value::float8(0.1).convert_to(Type::Float4), None);
		assert_eq!(Value::float8(1e300).convert_to(Type::Float4), None);
		assert_eq!(Value::float4(0.1).convert_to(Type::Float8), Some(Value::float8(0.1f32 as f64)));
	}

	#[test]
	fn test_non_numeric() {
		assert_eq!(Value::utf8("1").convert_to(Type::Int4), None);
		assert_eq!(Value::Int4(1).convert_to(Type::Utf8), None);
		assert_eq!(Value::Undefined.convert_to(Type::Int4), None);
	}
}
