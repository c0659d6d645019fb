// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index, IndexMut};

use gapfill_type::Value;
use serde::{Deserialize, Serialize};

use crate::value::column::{Column, ColumnData, ColumnsLayout};

/// A set of equally long, named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Columns {
	columns: Vec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		&self.columns[index]
	}
}

impl IndexMut<usize> for Columns {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.columns[index]
	}
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.data().len());
		assert!(columns.iter().all(|c| c.data().len() == n), "all columns must have the same length");

		Self {
			columns,
		}
	}

	pub fn empty() -> Self {
		Self {
			columns: vec![],
		}
	}

	/// Builds typed columns from row major values. Each value is converted
	/// into the type of its column as declared by `layout`.
	pub fn from_rows(layout: &ColumnsLayout, rows: &[Vec<Value>]) -> Self {
		let mut columns: Vec<Column> = layout
			.columns
			.iter()
			.map(|c| Column::new(c.name.clone(), ColumnData::with_capacity(c.ty, rows.len())))
			.collect();

		for row in rows {
			assert_eq!(row.len(), columns.len(), "row length does not match column count");
			for (column, value) in columns.iter_mut().zip(row.iter()) {
				column.data_mut().push_value(value.clone());
			}
		}

		Columns::new(columns)
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.data().len())
	}

	pub fn shape(&self) -> (usize, usize) {
		(self.row_count(), self.columns.len())
	}

	pub fn is_empty(&self) -> bool {
		self.row_count() == 0
	}

	pub fn row(&self, index: usize) -> Vec<Value> {
		self.columns.iter().map(|c| c.data().get_value(index)).collect()
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name() == name)
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c.name() == name)
	}

	/// Appends the rows of `other`; columns are matched by position.
	pub fn append(&mut self, other: Columns) -> crate::Result<()> {
		if self.columns.is_empty() {
			*self = other;
			return Ok(());
		}

		assert_eq!(self.columns.len(), other.columns.len(), "column count mismatch");
		for (l, r) in self.columns.iter_mut().zip(other.columns) {
			l.extend(r)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use gapfill_type::Type;

	use super::*;

	fn layout() -> ColumnsLayout {
		ColumnsLayout::new([("k", Type::Int8), ("v", Type::Utf8)])
	}

	#[test]
	fn test_from_rows() {
		let columns = Columns::from_rows(
			&layout(),
			&[vec![Value::Int8(1), Value::utf8("a")], vec![Value::Int4(2), Value::Undefined]],
		);

		assert_eq!(columns.shape(), (2, 2));
		assert_eq!(columns.row(0), vec![Value::Int8(1), Value::utf8("a")]);
		assert_eq!(columns.row(1), vec![Value::Int8(2), Value::Undefined]);
		assert_eq!(columns.column("v").unwrap().get_type(), Type::Utf8);
		assert_eq!(columns.position("v"), Some(1));
		assert!(columns.column("x").is_none());
	}

	#[test]
	fn test_from_no_rows_keeps_types() {
		let columns = Columns::from_rows(&layout(), &[]);
		assert!(columns.is_empty());
		assert_eq!(columns[0].get_type(), Type::Int8);
	}

	#[test]
	fn test_append() {
		let mut columns = Columns::empty();
		columns.append(Columns::from_rows(&layout(), &[vec![Value::Int8(1), Value::utf8("a")]])).unwrap();
		columns.append(Columns::from_rows(&layout(), &[vec![Value::Int8(2), Value::utf8("b")]])).unwrap();

		assert_eq!(columns.row_count(), 2);
		assert_eq!(columns.row(1), vec![Value::Int8(2), Value::utf8("b")]);
	}

	#[test]
	#[should_panic(expected = "same length")]
	fn test_new_rejects_ragged() {
		Columns::new(vec![Column::new("a", ColumnData::int4([1])), Column::new("b", ColumnData::int4([]))]);
	}
}
