// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_type::{error::diagnostic::query::row_length_mismatch, return_error};
use tracing::instrument;

use crate::{
	execute::{
		ExecutionPlan,
		query::{fill::FillNode, inline::InlineDataNode},
	},
	plan::{physical, physical::PhysicalPlan},
};

/// Turns a resolved plan into executable nodes, validating it on the way.
#[instrument(name = "query::compile", level = "trace", skip_all)]
pub(crate) fn compile(plan: PhysicalPlan) -> crate::Result<ExecutionPlan> {
	Ok(match plan {
		PhysicalPlan::InlineData(physical::InlineDataNode {
			layout,
			rows,
		}) => {
			for (idx, row) in rows.iter().enumerate() {
				if row.len() != layout.len() {
					return_error!(row_length_mismatch(idx, layout.len(), row.len()));
				}
			}
			ExecutionPlan::InlineData(InlineDataNode::new(layout, rows))
		}

		PhysicalPlan::Fill(physical::FillNode {
			input,
			by,
		}) => {
			let input = compile(*input)?;
			ExecutionPlan::Fill(FillNode::new(Box::new(input), by)?)
		}
	})
}
