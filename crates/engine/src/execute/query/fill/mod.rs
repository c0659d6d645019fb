// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! `WITH FILL`: completes sorted key columns into arithmetic progressions.
//!
//! [`FillPlan`] validates the key columns against the input layout,
//! [`FillingRow`] is the odometer moving through the progression and the
//! fill node interleaves its rows with the real input rows.

mod assemble;
mod node;
mod plan;
mod row;

pub(crate) use node::FillNode;
pub use plan::{FillDimension, FillPlan, FillRange, FillSpec};
pub use row::FillingRow;
