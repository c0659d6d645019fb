// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_core::value::column::{Column, ColumnData, Columns, ColumnsLayout};

use crate::execute::query::fill::{plan::FillPlan, row::FillingRow};

/// Output buffers of one fill batch.
///
/// Key columns are kept in plan order and all other columns in layout order;
/// [`FillBuffers::finish`] puts them back into the input column order.
pub(crate) struct FillBuffers {
	keys: Vec<ColumnData>,
	others: Vec<ColumnData>,
	generated: usize,
	copied: usize,
}

impl FillBuffers {
	pub(crate) fn new(plan: &FillPlan, layout: &ColumnsLayout, capacity: usize) -> Self {
		let keys = plan.key_positions().map(|pos| ColumnData::with_capacity(layout.columns[pos].ty, capacity)).collect();
		let others = plan
			.passthrough_positions()
			.iter()
			.map(|&pos| ColumnData::with_capacity(layout.columns[pos].ty, capacity))
			.collect();

		Self {
			keys,
			others,
			generated: 0,
			copied: 0,
		}
	}

	/// Appends a synthetic row holding the key values of `cursor`. Unset
	/// dimensions and all other columns get the default of their type.
	pub(crate) fn push_generated(&mut self, cursor: &FillingRow) {
		for (idx, data) in self.keys.iter_mut().enumerate() {
			match cursor.get(idx) {
				Some(value) => data.push_value(value.clone()),
				None => data.push_default(),
			}
		}
		for data in self.others.iter_mut() {
			data.push_default();
		}
		self.generated += 1;
	}

	/// Copies row `row` of `columns` as is.
	pub(crate) fn push_real(&mut self, plan: &FillPlan, columns: &Columns, row: usize) {
		for (data, pos) in self.keys.iter_mut().zip(plan.key_positions()) {
			data.push_value(columns[pos].data().get_value(row));
		}
		for (data, &pos) in self.others.iter_mut().zip(plan.passthrough_positions()) {
			data.push_value(columns[pos].data().get_value(row));
		}
		self.copied += 1;
	}

	pub(crate) fn generated(&self) -> usize {
		self.generated
	}

	pub(crate) fn copied(&self) -> usize {
		self.copied
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.generated == 0 && self.copied == 0
	}

	pub(crate) fn finish(self, plan: &FillPlan, layout: &ColumnsLayout) -> Columns {
		let mut slots: Vec<Option<ColumnData>> = vec![None; plan.width()];
		for (data, pos) in self.keys.into_iter().zip(plan.key_positions()) {
			slots[pos] = Some(data);
		}
		for (data, &pos) in self.others.into_iter().zip(plan.passthrough_positions()) {
			slots[pos] = Some(data);
		}

		let rows = self.generated + self.copied;
		let columns = slots
			.into_iter()
			.zip(layout.columns.iter())
			.map(|(data, column)| Column::new(column.name.clone(), data.unwrap_or_else(|| ColumnData::undefined(rows))))
			.collect();

		Columns::new(columns)
	}
}
