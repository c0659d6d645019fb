// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod columns;
mod data;
mod layout;

pub use columns::Columns;
pub use data::ColumnData;
use gapfill_type::Type;
pub use layout::{ColumnLayout, ColumnsLayout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn data_mut(&mut self) -> &mut ColumnData {
		&mut self.data
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn extend(&mut self, other: Column) -> crate::Result<()> {
		self.data.extend(&self.name, other.data)
	}
}
