// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use gapfill_type::{Error, Type, Value};
pub use sort::SortDirection;
pub use util::BitVec;

mod sort;
pub mod util;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
