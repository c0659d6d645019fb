// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_core::{Value, value::column::ColumnsLayout};
use serde::{Deserialize, Serialize};

use crate::execute::query::fill::FillSpec;

/// A fully resolved plan, as handed over by a planning stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PhysicalPlan {
	InlineData(InlineDataNode),
	Fill(FillNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineDataNode {
	pub layout: ColumnsLayout,
	pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillNode {
	pub input: Box<PhysicalPlan>,
	pub by: Vec<FillSpec>,
}
