// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_core::{
	Value,
	value::column::{Columns, ColumnsLayout},
};
use tracing::{instrument, trace};

use crate::execute::{Batch, ExecutionContext, QueryNode};

/// Emits literal rows in batches of `ExecutionContext::batch_size`.
pub(crate) struct InlineDataNode {
	layout: ColumnsLayout,
	rows: Vec<Vec<Value>>,
	position: usize,
	initialized: Option<()>,
}

impl InlineDataNode {
	pub(crate) fn new(layout: ColumnsLayout, rows: Vec<Vec<Value>>) -> Self {
		Self {
			layout,
			rows,
			position: 0,
			initialized: None,
		}
	}
}

impl QueryNode for InlineDataNode {
	#[instrument(name = "query::inline::initialize", level = "trace", skip_all)]
	fn initialize(&mut self, _ctx: &ExecutionContext) -> crate::Result<()> {
		self.position = 0;
		self.initialized = Some(());
		Ok(())
	}

	#[instrument(name = "query::inline::next", level = "trace", skip_all)]
	fn next(&mut self, ctx: &mut ExecutionContext) -> crate::Result<Option<Batch>> {
		debug_assert!(self.initialized.is_some(), "InlineDataNode::next() called before initialize()");

		if self.position >= self.rows.len() {
			return Ok(None);
		}

		let end = (self.position + ctx.batch_size.max(1)).min(self.rows.len());
		let columns = Columns::from_rows(&self.layout, &self.rows[self.position..end]);
		trace!(from = self.position, to = end, "inline batch");
		self.position = end;

		Ok(Some(Batch {
			columns,
		}))
	}

	fn layout(&self) -> Option<ColumnsLayout> {
		Some(self.layout.clone())
	}
}
