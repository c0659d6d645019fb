// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use gapfill_core::value::column::{Columns, ColumnsLayout};
use tracing::{debug, instrument, trace};

use crate::execute::{
	Batch, ExecutionContext, ExecutionPlan, QueryNode,
	query::fill::{
		assemble::FillBuffers,
		plan::{FillPlan, FillSpec},
		row::FillingRow,
	},
};

/// Interleaves synthetic rows with the sorted rows of its input so that every
/// fill key forms a complete progression.
pub(crate) struct FillNode {
	input: Box<ExecutionPlan>,
	plan: Arc<FillPlan>,
	layout: ColumnsLayout,
	cursor: FillingRow,
	target: FillingRow,
	first: bool,
	exhausted: bool,
	initialized: Option<()>,
}

impl FillNode {
	pub(crate) fn new(input: Box<ExecutionPlan>, by: Vec<FillSpec>) -> crate::Result<Self> {
		let layout = input.layout().unwrap_or(ColumnsLayout {
			columns: vec![],
		});
		let plan = Arc::new(FillPlan::new(by, &layout)?);

		Ok(Self {
			input,
			cursor: FillingRow::new(plan.clone()),
			target: FillingRow::new(plan.clone()),
			plan,
			layout,
			first: true,
			exhausted: false,
			initialized: None,
		})
	}

	fn fill(&mut self, ctx: &ExecutionContext, columns: Columns) -> crate::Result<Batch> {
		let rows = columns.row_count();
		let mut buffers = FillBuffers::new(&self.plan, &self.layout, rows);

		if self.first {
			self.first = false;
			self.cursor.init_from_columns(&columns, 0);

			// a gap between `from` and the very first row
			for idx in 0..self.plan.len() {
				let dimension = self.plan.dimension(idx);
				let (Some(from), Some(value)) = (dimension.from(), self.cursor.get(idx)) else {
					continue;
				};
				if dimension.less(from, value) {
					self.cursor.init_from_defaults(idx);
					buffers.push_generated(&self.cursor);
					break;
				}
			}
		}

		for row in 0..rows {
			self.target.init_from_columns(&columns, row);
			loop {
				ctx.interrupt.check()?;
				if !self.cursor.advance(&self.target) {
					break;
				}
				buffers.push_generated(&self.cursor);
			}
			buffers.push_real(&self.plan, &columns, row);
		}

		trace!(generated = buffers.generated(), copied = buffers.copied(), "fill batch");
		Ok(Batch {
			columns: buffers.finish(&self.plan, &self.layout),
		})
	}

	fn drain(&mut self, ctx: &ExecutionContext) -> crate::Result<Option<Batch>> {
		self.target.init_from_bounds();
		let mut buffers = FillBuffers::new(&self.plan, &self.layout, 0);

		loop {
			ctx.interrupt.check()?;
			if !self.cursor.advance(&self.target) {
				break;
			}
			buffers.push_generated(&self.cursor);
		}

		debug!(generated = buffers.generated(), "fill drained");
		if buffers.is_empty() {
			return Ok(None);
		}

		Ok(Some(Batch {
			columns: buffers.finish(&self.plan, &self.layout),
		}))
	}
}

impl QueryNode for FillNode {
	#[instrument(name = "query::fill::initialize", level = "trace", skip_all)]
	fn initialize(&mut self, ctx: &ExecutionContext) -> crate::Result<()> {
		self.input.initialize(ctx)?;
		self.initialized = Some(());
		Ok(())
	}

	#[instrument(name = "query::fill::next", level = "trace", skip_all)]
	fn next(&mut self, ctx: &mut ExecutionContext) -> crate::Result<Option<Batch>> {
		debug_assert!(self.initialized.is_some(), "FillNode::next() called before initialize()");

		loop {
			if self.exhausted {
				return Ok(None);
			}

			ctx.interrupt.check()?;
			let Some(Batch {
				columns,
			}) = self.input.next(ctx)?
			else {
				self.exhausted = true;
				return self.drain(ctx);
			};

			if columns.is_empty() {
				continue;
			}

			return self.fill(ctx, columns).map(Some);
		}
	}

	fn layout(&self) -> Option<ColumnsLayout> {
		Some(self.layout.clone())
	}
}

#[cfg(test)]
mod tests {
	use gapfill_core::{Type, Value};

	use super::*;
	use crate::execute::{
		Interrupt,
		query::{fill::plan::FillRange, inline::InlineDataNode},
	};

	fn node(layout: ColumnsLayout, rows: Vec<Vec<Value>>, by: Vec<FillSpec>) -> crate::Result<FillNode> {
		let input = ExecutionPlan::InlineData(InlineDataNode::new(layout, rows));
		FillNode::new(Box::new(input), by)
	}

	fn run(mut node: FillNode, ctx: &mut ExecutionContext) -> crate::Result<Vec<Vec<Value>>> {
		node.initialize(ctx)?;
		let mut result = vec![];
		while let Some(batch) = node.next(ctx)? {
			for row in 0..batch.columns.row_count() {
				result.push(batch.columns.row(row));
			}
		}
		Ok(result)
	}

	fn ints(values: &[i64]) -> Vec<Vec<Value>> {
		values.iter().map(|v| vec![Value::Int8(*v)]).collect()
	}

	fn single(values: &[i64], spec: FillSpec) -> Vec<Vec<Value>> {
		let layout = ColumnsLayout::new([("v", Type::Int8)]);
		let node = node(layout, ints(values), vec![spec]).unwrap();
		run(node, &mut ExecutionContext::default()).unwrap()
	}

	#[test]
	fn test_fill_gaps_without_bounds() {
		let output = single(&[1, 3, 7], FillSpec::asc("v").with_fill(FillRange::new()));
		assert_eq!(output, ints(&[1, 2, 3, 4, 5, 6, 7]));
	}

	#[test]
	fn test_trailing_rows_up_to_exclusive_bound() {
		let output = single(&[8], FillSpec::asc("v").with_fill(FillRange::new().to(Value::Int8(10))));
		assert_eq!(output, ints(&[8, 9]));

		let output = single(&[8], FillSpec::asc("v").with_fill(FillRange::new().to(Value::Int8(11))));
		assert_eq!(output, ints(&[8, 9, 10]));
	}

	#[test]
	fn test_leading_rows_from_bound() {
		let output = single(&[3, 4], FillSpec::asc("v").with_fill(FillRange::new().from(Value::Int8(0))));
		assert_eq!(output, ints(&[0, 1, 2, 3, 4]));

		// a from bound after the first row does not move the cursor
		let output = single(&[3, 5], FillSpec::asc("v").with_fill(FillRange::new().from(Value::Int8(4))));
		assert_eq!(output, ints(&[3, 4, 5]));
	}

	#[test]
	fn test_descending() {
		let range = FillRange::new().from(Value::Int8(10)).to(Value::Int8(0)).step(Value::Int8(1));
		let output = single(&[10, 6], FillSpec::desc("v").with_fill(range));
		assert_eq!(output, ints(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]));
	}

	#[test]
	fn test_partition_resets_minor() {
		let layout = ColumnsLayout::new([("day", Type::Int4), ("hour", Type::Int4)]);
		let rows = [(1, 0), (1, 5), (2, 2)].iter().map(|(d, h)| vec![Value::Int4(*d), Value::Int4(*h)]).collect();
		let by = vec![FillSpec::asc("day"), FillSpec::asc("hour").with_fill(FillRange::new().from(Value::Int4(0)))];

		let output = run(node(layout, rows, by).unwrap(), &mut ExecutionContext::default()).unwrap();
		let expected: Vec<Vec<Value>> = [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (2, 0), (2, 1), (2, 2)]
			.iter()
			.map(|(d, h)| vec![Value::Int4(*d), Value::Int4(*h)])
			.collect();
		assert_eq!(output, expected);
	}

	#[test]
	fn test_bounded_minor_exhausts_before_partition_changes() {
		let layout = ColumnsLayout::new([("day", Type::Int4), ("hour", Type::Int4)]);
		let rows = [(1, 0), (2, 1)].iter().map(|(d, h)| vec![Value::Int4(*d), Value::Int4(*h)]).collect();
		let range = FillRange::new().from(Value::Int4(0)).to(Value::Int4(4));
		let by = vec![FillSpec::asc("day"), FillSpec::asc("hour").with_fill(range)];

		let output = run(node(layout, rows, by).unwrap(), &mut ExecutionContext::default()).unwrap();
		let expected: Vec<Vec<Value>> = [(1, 0), (1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2), (2, 3)]
			.iter()
			.map(|(d, h)| vec![Value::Int4(*d), Value::Int4(*h)])
			.collect();
		assert_eq!(output, expected);
	}

	#[test]
	fn test_passthrough_columns_defaulted() {
		let layout = ColumnsLayout::new([("note", Type::Utf8), ("v", Type::Uint4), ("flag", Type::Boolean)]);
		let rows = vec![
			vec![Value::utf8("a"), Value::Uint4(1), Value::Boolean(true)],
			vec![Value::utf8("b"), Value::Uint4(3), Value::Undefined],
		];
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new())];

		let output = run(node(layout, rows, by).unwrap(), &mut ExecutionContext::default()).unwrap();
		assert_eq!(
			output,
			vec![
				vec![Value::utf8("a"), Value::Uint4(1), Value::Boolean(true)],
				vec![Value::utf8(""), Value::Uint4(2), Value::Boolean(false)],
				vec![Value::utf8("b"), Value::Uint4(3), Value::Undefined],
			]
		);
	}

	#[test]
	fn test_gaps_across_batches() {
		let layout = ColumnsLayout::new([("v", Type::Int8)]);
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new().to(Value::Int8(12)))];
		let node = node(layout, ints(&[0, 3, 4, 8, 9]), by).unwrap();

		let mut ctx = ExecutionContext::default().with_batch_size(2);
		let output = run(node, &mut ctx).unwrap();
		assert_eq!(output, ints(&(0..12).collect::<Vec<_>>()));
	}

	#[test]
	fn test_empty_input() {
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new().from(Value::Int8(0)).to(Value::Int8(5)))];
		let node = node(ColumnsLayout::new([("v", Type::Int8)]), vec![], by).unwrap();
		assert!(run(node, &mut ExecutionContext::default()).unwrap().is_empty());
	}

	#[test]
	fn test_exhausted_stays_exhausted() {
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new().to(Value::Int8(3)))];
		let mut node = node(ColumnsLayout::new([("v", Type::Int8)]), ints(&[1]), by).unwrap();
		let mut ctx = ExecutionContext::default();
		node.initialize(&ctx).unwrap();

		assert_eq!(node.next(&mut ctx).unwrap().unwrap().columns.row_count(), 1);
		assert_eq!(node.next(&mut ctx).unwrap().unwrap().columns.row_count(), 1);
		assert!(node.next(&mut ctx).unwrap().is_none());
		assert!(node.next(&mut ctx).unwrap().is_none());
	}

	#[test]
	fn test_unsigned_negative_from_rejected() {
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new().from(Value::Int8(-1)))];
		let result = node(ColumnsLayout::new([("v", Type::Uint8)]), vec![], by);
		assert_eq!(result.err().unwrap().code, "FILL_002");
	}

	#[test]
	fn test_cancelled() {
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new())];
		let node = node(ColumnsLayout::new([("v", Type::Int8)]), ints(&[0, 1_000_000]), by).unwrap();

		let interrupt = Interrupt::new();
		interrupt.raise();
		let mut ctx = ExecutionContext::default().with_interrupt(interrupt);
		let err = run(node, &mut ctx).unwrap_err();
		assert_eq!(err.code, "QUERY_002");
	}

	#[test]
	fn test_cancelled_inside_gap() {
		let layout = ColumnsLayout::new([("v", Type::Int8)]);
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new())];
		let mut node = node(layout.clone(), vec![], by).unwrap();

		let interrupt = Interrupt::new();
		let ctx = ExecutionContext::default().with_interrupt(interrupt.clone());
		node.initialize(&ctx).unwrap();

		let batch = node.fill(&ctx, Columns::from_rows(&layout, &ints(&[0]))).unwrap();
		assert_eq!(batch.columns.row_count(), 1);

		interrupt.raise();
		let err = node.fill(&ctx, Columns::from_rows(&layout, &ints(&[1_000_000]))).unwrap_err();
		assert_eq!(err.code, "QUERY_002");
	}

	#[test]
	fn test_cancelled_while_draining() {
		let layout = ColumnsLayout::new([("v", Type::Int8)]);
		let by = vec![FillSpec::asc("v").with_fill(FillRange::new().to(Value::Int8(10)))];
		let mut node = node(layout.clone(), vec![], by).unwrap();

		let interrupt = Interrupt::new();
		let ctx = ExecutionContext::default().with_interrupt(interrupt.clone());
		node.initialize(&ctx).unwrap();
		node.fill(&ctx, Columns::from_rows(&layout, &ints(&[0]))).unwrap();

		interrupt.raise();
		let err = node.drain(&ctx).unwrap_err();
		assert_eq!(err.code, "QUERY_002");

		interrupt.reset();
		let batch = node.drain(&ctx).unwrap().unwrap();
		assert_eq!(batch.columns.row_count(), 9);
	}

	#[test]
	fn test_layout_is_input_layout() {
		let layout = ColumnsLayout::new([("a", Type::Utf8), ("v", Type::Int8)]);
		let node = node(layout.clone(), vec![], vec![FillSpec::asc("v")]).unwrap();
		assert_eq!(node.layout(), Some(layout));
	}
}
