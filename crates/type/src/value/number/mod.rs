// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod arith;
mod convert;
pub mod safe;

pub use safe::{add::SafeAdd, sub::SafeSub};
