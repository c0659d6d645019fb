// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use execute::{
	ExecutionContext, Executor, Interrupt,
	query::fill::{FillPlan, FillRange, FillSpec, FillingRow},
};
pub use gapfill_core::Result;

pub mod execute;
pub mod plan;
