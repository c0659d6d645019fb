// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_type::Type;
use serde::{Deserialize, Serialize};

use crate::value::column::{Column, Columns};

/// Names and types of the columns a node produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnsLayout {
	pub columns: Vec<ColumnLayout>,
}

impl ColumnsLayout {
	pub fn new<'a>(columns: impl IntoIterator<Item = (&'a str, Type)>) -> Self {
		Self {
			columns: columns
				.into_iter()
				.map(|(name, ty)| ColumnLayout {
					name: name.to_string(),
					ty,
				})
				.collect(),
		}
	}

	pub fn from_columns(columns: &Columns) -> Self {
		Self {
			columns: columns.iter().map(ColumnLayout::from_column).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c.name == name)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
	pub name: String,
	pub ty: Type,
}

impl ColumnLayout {
	pub fn from_column(column: &Column) -> Self {
		Self {
			name: column.name.clone(),
			ty: column.get_type(),
		}
	}
}
