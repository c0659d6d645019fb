// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub trait SafeAdd: Sized {
	fn checked_add(self, r: Self) -> Option<Self>;
	fn saturating_add(self, r: Self) -> Self;
}

macro_rules! impl_safe_add {
    ($($t:ty),*) => {
        $(
            impl SafeAdd for $t {
                fn checked_add(self, r: Self) -> Option<Self> {
                    <$t>::checked_add(self, r)
                }
                fn saturating_add(self, r: Self) -> Self {
                    <$t>::saturating_add(self, r)
                }
            }
        )*
    };
}

impl_safe_add!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl SafeAdd for f32 {
	fn checked_add(self, r: Self) -> Option<Self> {
		let result = self + r;
		if result.is_finite() {
			Some(result)
		} else {
			None
		}
	}

	fn saturating_add(self, r: Self) -> Self {
		let result = self + r;
		if result.is_infinite() {
			if result.is_sign_positive() {
				f32::MAX
			} else {
				f32::MIN
			}
		} else {
			result
		}
	}
}

impl SafeAdd for f64 {
	fn checked_add(self, r: Self) -> Option<Self> {
		let result = self + r;
		if result.is_finite() {
			Some(result)
		} else {
			None
		}
	}

	fn saturating_add(self, r: Self) -> Self {
		let result = self + r;
		if result.is_infinite() {
			if result.is_sign_positive() {
				f64::MAX
			} else {
				f64::MIN
			}
		} else {
			result
		}
	}
}
