// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::{
	Arc,
	atomic::{AtomicBool, Ordering},
};

use gapfill_core::value::column::{Columns, ColumnsLayout};
use gapfill_type::{error::diagnostic::query::query_cancelled, return_error};
use query::{compile::compile, fill::FillNode, inline::InlineDataNode};
use tracing::{debug, instrument};

use crate::plan::physical::PhysicalPlan;

pub mod query;

/// Cooperative cancellation flag shared between a caller and a running query.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn raise(&self) {
		self.0.store(true, Ordering::Release);
	}

	pub fn reset(&self) {
		self.0.store(false, Ordering::Release);
	}

	pub fn is_raised(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}

	/// Fails with `query_cancelled` once the flag is raised.
	pub fn check(&self) -> crate::Result<()> {
		if self.is_raised() {
			return_error!(query_cancelled());
		}
		Ok(())
	}
}

#[derive(Debug, Clone)]
pub struct ExecutionContext {
	pub batch_size: usize,
	pub interrupt: Interrupt,
}

impl Default for ExecutionContext {
	fn default() -> Self {
		Self {
			batch_size: 1024,
			interrupt: Interrupt::default(),
		}
	}
}

impl ExecutionContext {
	pub fn with_batch_size(mut self, batch_size: usize) -> Self {
		self.batch_size = batch_size.max(1);
		self
	}

	pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
		self.interrupt = interrupt;
		self
	}
}

#[derive(Debug)]
pub struct Batch {
	pub columns: Columns,
}

/// Volcano style iterator every execution node implements.
pub(crate) trait QueryNode {
	/// Called once before the first call to `next`.
	fn initialize(&mut self, ctx: &ExecutionContext) -> crate::Result<()>;

	/// The next batch, or `None` once the node is exhausted.
	fn next(&mut self, ctx: &mut ExecutionContext) -> crate::Result<Option<Batch>>;

	fn layout(&self) -> Option<ColumnsLayout>;
}

pub(crate) enum ExecutionPlan {
	InlineData(InlineDataNode),
	Fill(FillNode),
}

impl QueryNode for Box<ExecutionPlan> {
	fn initialize(&mut self, ctx: &ExecutionContext) -> crate::Result<()> {
		(**self).initialize(ctx)
	}

	fn next(&mut self, ctx: &mut ExecutionContext) -> crate::Result<Option<Batch>> {
		(**self).next(ctx)
	}

	fn layout(&self) -> Option<ColumnsLayout> {
		(**self).layout()
	}
}

impl QueryNode for ExecutionPlan {
	fn initialize(&mut self, ctx: &ExecutionContext) -> crate::Result<()> {
		match self {
			ExecutionPlan::InlineData(node) => node.initialize(ctx),
			ExecutionPlan::Fill(node) => node.initialize(ctx),
		}
	}

	fn next(&mut self, ctx: &mut ExecutionContext) -> crate::Result<Option<Batch>> {
		match self {
			ExecutionPlan::InlineData(node) => node.next(ctx),
			ExecutionPlan::Fill(node) => node.next(ctx),
		}
	}

	fn layout(&self) -> Option<ColumnsLayout> {
		match self {
			ExecutionPlan::InlineData(node) => node.layout(),
			ExecutionPlan::Fill(node) => node.layout(),
		}
	}
}

#[derive(Debug, Default)]
pub struct Executor;

impl Executor {
	pub fn new() -> Self {
		Self
	}

	/// Runs `plan` to completion and concatenates all produced batches.
	#[instrument(name = "executor::execute", level = "debug", skip_all)]
	pub fn execute(&self, plan: PhysicalPlan, ctx: &mut ExecutionContext) -> crate::Result<Columns> {
		let mut node = compile(plan)?;
		node.initialize(ctx)?;

		let mut result = Columns::empty();
		let mut batches = 0usize;
		while let Some(Batch {
			columns,
		}) = node.next(ctx)?
		{
			batches += 1;
			result.append(columns)?;
		}

		if batches == 0 {
			if let Some(layout) = node.layout() {
				result = Columns::from_rows(&layout, &[]);
			}
		}

		debug!(batches, rows = result.row_count(), "query finished");
		Ok(result)
	}

	/// Runs `plan` to completion and returns every produced batch as is.
	#[instrument(name = "executor::execute_batches", level = "debug", skip_all)]
	pub fn execute_batches(&self, plan: PhysicalPlan, ctx: &mut ExecutionContext) -> crate::Result<Vec<Columns>> {
		let mut node = compile(plan)?;
		node.initialize(ctx)?;

		let mut result = Vec::new();
		while let Some(Batch {
			columns,
		}) = node.next(ctx)?
		{
			result.push(columns);
		}
		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_interrupt_shared() {
		let interrupt = Interrupt::new();
		let ctx = ExecutionContext::default().with_interrupt(interrupt.clone());
		assert!(ctx.interrupt.check().is_ok());

		interrupt.raise();
		let err = ctx.interrupt.check().unwrap_err();
		assert_eq!(err.code, "QUERY_002");

		interrupt.reset();
		assert!(!ctx.interrupt.is_raised());
	}

	#[test]
	fn test_context_defaults() {
		let ctx = ExecutionContext::default();
		assert_eq!(ctx.batch_size, 1024);
		assert_eq!(ExecutionContext::default().with_batch_size(0).batch_size, 1);
	}
}
