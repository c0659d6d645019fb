// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use gapfill_core::{Value, value::column::Columns};

use crate::execute::query::fill::plan::FillPlan;

/// One value per key column of a [`FillPlan`]; `None` marks a dimension that
/// is not set.
///
/// A fill node keeps two of these: the cursor, holding the last row emitted
/// along the progression, and the target it advances towards.
#[derive(Debug, Clone, PartialEq)]
pub struct FillingRow {
	plan: Arc<FillPlan>,
	row: Vec<Option<Value>>,
}

impl FillingRow {
	pub fn new(plan: Arc<FillPlan>) -> Self {
		let row = vec![None; plan.len()];
		Self {
			plan,
			row,
		}
	}

	pub fn len(&self) -> usize {
		self.row.len()
	}

	pub fn is_empty(&self) -> bool {
		self.row.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&Value> {
		self.row.get(idx).and_then(Option::as_ref)
	}

	pub fn values(&self) -> &[Option<Value>] {
		&self.row
	}

	/// Reads the key values of `row` from input columns laid out as the plan
	/// expects. Undefined cells leave the dimension unset.
	pub fn init_from_columns(&mut self, columns: &Columns, row: usize) {
		for (idx, dimension) in self.plan.dimensions().iter().enumerate() {
			let value = columns[dimension.position()].data().get_value(row);
			self.row[idx] = if value.is_undefined() {
				None
			} else {
				Some(value)
			};
		}
	}

	/// Resets every dimension from `from` onwards to its `from` bound.
	pub fn init_from_defaults(&mut self, from: usize) {
		for idx in from..self.row.len() {
			self.row[idx] = self.plan.dimension(idx).from().cloned();
		}
	}

	/// Sets every dimension to its `to` bound.
	pub fn init_from_bounds(&mut self) {
		for idx in 0..self.row.len() {
			self.row[idx] = self.plan.dimension(idx).to().cloned();
		}
	}

	/// Moves to the next row of the fill progression, strictly after the
	/// current one and never past `target`.
	///
	/// Returns `false` once the cursor caught up with `target`; in that case
	/// the cursor may have been moved onto the target itself.
	pub fn advance(&mut self, target: &FillingRow) -> bool {
		debug_assert_eq!(self.len(), target.len());

		let plan = Arc::clone(&self.plan);
		let size = self.row.len();

		let Some(pos) = (0..size).find(|&idx| match (&self.row[idx], &target.row[idx]) {
			(Some(current), Some(expected)) => current != expected,
			_ => false,
		}) else {
			return false;
		};

		let (Some(current), Some(expected)) = (self.row[pos].clone(), &target.row[pos]) else {
			return false;
		};

		let dimension = plan.dimension(pos);
		if dimension.less(expected, &current) {
			return false;
		}

		// minor dimensions exhaust their own range before `pos` moves
		for idx in (pos + 1..size).rev() {
			let minor = plan.dimension(idx);
			let (Some(to), Some(value)) = (minor.to(), &self.row[idx]) else {
				continue;
			};
			let Some(candidate) = minor.next_value(value) else {
				continue;
			};
			if minor.less(&candidate, to) {
				self.init_from_defaults(idx + 1);
				self.row[idx] = Some(candidate);
				return true;
			}
		}

		// a pass-through key jumps straight to the target
		let candidate = if dimension.is_fill() {
			match dimension.next_value(&current) {
				Some(candidate) => candidate,
				None => return false,
			}
		} else {
			expected.clone()
		};

		if &candidate == expected {
			for idx in pos + 1..size {
				let minor = plan.dimension(idx);
				if let (Some(from), Some(value)) = (minor.from(), &target.row[idx]) {
					if minor.less(from, value) {
						self.init_from_defaults(idx);
						self.row[pos] = Some(candidate);
						return true;
					}
				}
				self.row[idx] = target.row[idx].clone();
			}
			self.row[pos] = Some(candidate);
			return false;
		}

		if dimension.less(&candidate, expected) {
			self.init_from_defaults(pos + 1);
			self.row[pos] = Some(candidate);
			return true;
		}

		false
	}
}

#[cfg(test)]
mod tests {
	use gapfill_core::{Type, value::column::ColumnsLayout};

	use super::*;
	use crate::execute::query::fill::plan::{FillRange, FillSpec};

	fn plan(layout: &[(&str, Type)], specs: Vec<FillSpec>) -> Arc<FillPlan> {
		Arc::new(FillPlan::new(specs, &ColumnsLayout::new(layout.iter().copied())).unwrap())
	}

	fn row(plan: &Arc<FillPlan>, values: &[Option<Value>]) -> FillingRow {
		let mut result = FillingRow::new(plan.clone());
		result.row = values.to_vec();
		result
	}

	fn drain(cursor: &mut FillingRow, target: &FillingRow) -> Vec<Vec<Option<Value>>> {
		let mut result = vec![];
		while cursor.advance(target) {
			result.push(cursor.values().to_vec());
			assert!(result.len() < 10_000, "advance did not terminate");
		}
		result
	}

	fn i(v: i64) -> Option<Value> {
		Some(Value::Int8(v))
	}

	#[test]
	fn test_new_is_unset() {
		let plan = plan(&[("v", Type::Int8)], vec![FillSpec::asc("v")]);
		let row = FillingRow::new(plan);
		assert_eq!(row.len(), 1);
		assert_eq!(row.get(0), None);
	}

	#[test]
	fn test_init_from_columns() {
		let layout = ColumnsLayout::new([("name", Type::Utf8), ("v", Type::Int8)]);
		let plan = Arc::new(FillPlan::new(vec![FillSpec::asc("v")], &layout).unwrap());
		let columns = Columns::from_rows(
			&layout,
			&[vec![Value::utf8("a"), Value::Int8(4)], vec![Value::utf8("b"), Value::Undefined]],
		);

		let mut row = FillingRow::new(plan);
		row.init_from_columns(&columns, 0);
		assert_eq!(row.get(0), Some(&Value::Int8(4)));
		row.init_from_columns(&columns, 1);
		assert_eq!(row.get(0), None);
	}

	#[test]
	fn test_init_from_defaults_and_bounds() {
		let plan = plan(
			&[("a", Type::Int8), ("b", Type::Int8), ("c", Type::Int8)],
			vec![
				FillSpec::asc("a"),
				FillSpec::asc("b").with_fill(FillRange::new().from(Value::Int8(1)).to(Value::Int8(9))),
				FillSpec::asc("c").with_fill(FillRange::new().to(Value::Int8(5))),
			],
		);
		let mut cursor = row(&plan, &[i(7), i(8), i(9)]);

		cursor.init_from_defaults(1);
		assert_eq!(cursor.values(), &[i(7), i(1), None]);

		cursor.init_from_bounds();
		assert_eq!(cursor.values(), &[None, i(9), i(5)]);
	}

	#[test]
	fn test_single_dimension_gap() {
		let plan = plan(&[("v", Type::Int8)], vec![FillSpec::asc("v").with_fill(FillRange::new())]);
		let mut cursor = row(&plan, &[i(1)]);
		let target = row(&plan, &[i(4)]);

		assert_eq!(drain(&mut cursor, &target), vec![vec![i(2)], vec![i(3)]]);
		// the last call lands the cursor on the target without producing a row
		assert_eq!(cursor.values(), &[i(4)]);
		assert!(!cursor.advance(&target));
	}

	#[test]
	fn test_target_behind_cursor() {
		let plan = plan(&[("v", Type::Int8)], vec![FillSpec::asc("v").with_fill(FillRange::new())]);
		let mut cursor = row(&plan, &[i(5)]);
		assert!(!cursor.advance(&row(&plan, &[i(3)])));
		assert!(!cursor.advance(&row(&plan, &[i(5)])));
		assert_eq!(cursor.values(), &[i(5)]);
	}

	#[test]
	fn test_step_overshoots_target() {
		let plan = plan(
			&[("v", Type::Int8)],
			vec![FillSpec::asc("v").with_fill(FillRange::new().step(Value::Int8(3)))],
		);
		let mut cursor = row(&plan, &[i(0)]);
		let target = row(&plan, &[i(7)]);
		assert_eq!(drain(&mut cursor, &target), vec![vec![i(3)], vec![i(6)]]);
		assert_eq!(cursor.values(), &[i(6)]);
	}

	#[test]
	fn test_descending() {
		let plan = plan(
			&[("v", Type::Int8)],
			vec![FillSpec::desc("v").with_fill(
				FillRange::new().from(Value::Int8(10)).to(Value::Int8(0)).step(Value::Int8(2)),
			)],
		);
		let mut cursor = row(&plan, &[i(10)]);
		assert_eq!(drain(&mut cursor, &row(&plan, &[i(5)])), vec![vec![i(8)], vec![i(6)]]);

		let mut bounds = FillingRow::new(plan.clone());
		bounds.init_from_bounds();
		cursor.row = vec![i(5)];
		assert_eq!(drain(&mut cursor, &bounds), vec![vec![i(3)], vec![i(1)]]);
	}

	#[test]
	fn test_unset_dimensions_are_skipped() {
		let plan = plan(
			&[("a", Type::Int8), ("b", Type::Int8)],
			vec![FillSpec::asc("a").with_fill(FillRange::new()), FillSpec::asc("b").with_fill(FillRange::new())],
		);
		let mut cursor = row(&plan, &[None, i(1)]);
		assert_eq!(drain(&mut cursor, &row(&plan, &[i(5), i(3)])), vec![vec![None, i(2)]]);
		assert_eq!(cursor.values(), &[None, i(3)]);
	}

	#[test]
	fn test_minor_carry_exhausts_range_first() {
		let plan = plan(
			&[("day", Type::Int8), ("hour", Type::Int8)],
			vec![
				FillSpec::asc("day").with_fill(FillRange::new()),
				FillSpec::asc("hour").with_fill(FillRange::new().from(Value::Int8(0)).to(Value::Int8(3))),
			],
		);
		let mut cursor = row(&plan, &[i(1), i(1)]);
		let target = row(&plan, &[i(3), i(1)]);

		assert_eq!(
			drain(&mut cursor, &target),
			vec![vec![i(1), i(2)], vec![i(2), i(0)], vec![i(2), i(1)], vec![i(2), i(2)], vec![i(3), i(0)]]
		);
		assert_eq!(cursor.values(), &[i(3), i(1)]);
	}

	#[test]
	fn test_pass_through_partition() {
		let plan = plan(
			&[("day", Type::Int8), ("hour", Type::Int8)],
			vec![FillSpec::asc("day"), FillSpec::asc("hour").with_fill(FillRange::new().from(Value::Int8(0)))],
		);
		let mut cursor = row(&plan, &[i(1), i(5)]);
		let target = row(&plan, &[i(4), i(2)]);

		// the partition key jumps, only the fill dimension is interpolated
		assert_eq!(drain(&mut cursor, &target), vec![vec![i(4), i(0)], vec![i(4), i(1)]]);
		assert_eq!(cursor.values(), &[i(4), i(2)]);
	}

	#[test]
	fn test_catch_up_copies_minor_without_room() {
		let plan = plan(
			&[("a", Type::Int8), ("b", Type::Int8), ("c", Type::Int8)],
			vec![
				FillSpec::asc("a").with_fill(FillRange::new()),
				FillSpec::asc("b"),
				FillSpec::asc("c").with_fill(FillRange::new().from(Value::Int8(0))),
			],
		);
		let mut cursor = row(&plan, &[i(1), i(7), i(3)]);
		let target = row(&plan, &[i(2), i(9), i(2)]);

		// b has no from, it is copied; c still has room below the target
		assert_eq!(drain(&mut cursor, &target), vec![vec![i(2), i(9), i(0)], vec![i(2), i(9), i(1)]]);
		assert_eq!(cursor.values(), &[i(2), i(9), i(2)]);
	}

	#[test]
	fn test_overflow_stops() {
		let plan = plan(
			&[("v", Type::Int1)],
			vec![FillSpec::asc("v").with_fill(FillRange::new().step(Value::Int1(100)))],
		);
		let mut cursor = FillingRow::new(plan.clone());
		cursor.row = vec![Some(Value::Int1(0))];
		let target = FillingRow {
			plan: plan.clone(),
			row: vec![Some(Value::Int1(127))],
		};
		assert_eq!(drain(&mut cursor, &target), vec![vec![Some(Value::Int1(100))]]);
		assert!(!cursor.advance(&target));
	}

	#[test]
	fn test_monotonic_with_step() {
		let plan = plan(
			&[("v", Type::Int8)],
			vec![FillSpec::asc("v").with_fill(FillRange::new().step(Value::Int8(7)))],
		);
		let mut cursor = row(&plan, &[i(-20)]);
		let emitted = drain(&mut cursor, &row(&plan, &[i(50)]));

		let values: Vec<i64> = emitted
			.iter()
			.map(|r| match &r[0] {
				Some(Value::Int8(v)) => *v,
				other => panic!("unexpected {other:?}"),
			})
			.collect();
		assert_eq!(values.first(), Some(&-13));
		assert!(values.windows(2).all(|w| w[1] - w[0] == 7));
		assert!(values.iter().all(|v| *v < 50));
	}
}
