// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use gapfill_core::{SortDirection, Type, Value, value::column::ColumnsLayout};
use gapfill_type::{
	err, error,
	error::diagnostic::{
		fill::{
			degenerate_fill_step, duplicate_fill_column, fill_bound_not_numeric, inverted_fill_range,
			invalid_fill_column_type, negative_fill_bound, unrepresentable_fill_bound,
		},
		query::column_not_found,
	},
	return_error,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One key column of a fill description, in sort priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillSpec {
	pub column: String,
	#[serde(default)]
	pub direction: SortDirection,
	/// `None` keeps the column as a pass-through sort key.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fill: Option<FillRange>,
}

impl FillSpec {
	pub fn asc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Asc,
			fill: None,
		}
	}

	pub fn desc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Desc,
			fill: None,
		}
	}

	pub fn with_fill(mut self, fill: FillRange) -> Self {
		self.fill = Some(fill);
		self
	}
}

/// `from` is inclusive, `to` is exclusive and `step` is a positive magnitude
/// applied in the direction of the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillRange {
	#[serde(default)]
	pub from: Option<Value>,
	#[serde(default)]
	pub to: Option<Value>,
	#[serde(default)]
	pub step: Option<Value>,
}

impl FillRange {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from(mut self, from: Value) -> Self {
		self.from = Some(from);
		self
	}

	pub fn to(mut self, to: Value) -> Self {
		self.to = Some(to);
		self
	}

	pub fn step(mut self, step: Value) -> Self {
		self.step = Some(step);
		self
	}
}

/// A validated key column. Bounds and step share the type of the column.
#[derive(Debug, Clone, PartialEq)]
pub struct FillDimension {
	column: String,
	position: usize,
	direction: SortDirection,
	from: Option<Value>,
	to: Option<Value>,
	step: Option<Value>,
}

impl FillDimension {
	fn new(spec: FillSpec, position: usize, ty: Type) -> crate::Result<Self> {
		let FillSpec {
			column,
			direction,
			fill,
		} = spec;

		let Some(range) = fill else {
			return Ok(Self {
				column,
				position,
				direction,
				from: None,
				to: None,
				step: None,
			});
		};

		if !ty.is_number() {
			return_error!(invalid_fill_column_type(&column, ty));
		}

		let from = normalize_bound(&column, ty, "from", range.from)?;
		let to = normalize_bound(&column, ty, "to", range.to)?;
		let step = normalize_step(&column, ty, range.step)?;

		let result = Self {
			column,
			position,
			direction,
			from,
			to,
			step: Some(step),
		};

		if let (Some(from), Some(to)) = (&result.from, &result.to) {
			if result.less(to, from) {
				return_error!(inverted_fill_range(
					&result.column,
					ty,
					&direction.to_string(),
					from,
					to
				));
			}
		}

		Ok(result)
	}

	/// Position of the column in the input layout.
	pub fn position(&self) -> usize {
		self.position
	}

	pub fn from(&self) -> Option<&Value> {
		self.from.as_ref()
	}

	pub fn to(&self) -> Option<&Value> {
		self.to.as_ref()
	}

	pub fn step(&self) -> Option<&Value> {
		self.step.as_ref()
	}

	/// Whether this dimension generates values or only partitions.
	pub fn is_fill(&self) -> bool {
		self.step.is_some()
	}

	/// `l` is strictly before `r` in the direction of this dimension.
	/// Values of different types are never ordered.
	pub fn less(&self, l: &Value, r: &Value) -> bool {
		match self.direction {
			SortDirection::Asc => l < r,
			SortDirection::Desc => l > r,
		}
	}

	/// The value one step after `value`, or `None` when stepping overflows
	/// the column type or no longer changes the value.
	pub fn next_value(&self, value: &Value) -> Option<Value> {
		let step = self.step.as_ref()?;
		let next = match self.direction {
			SortDirection::Asc => value.checked_add(step),
			SortDirection::Desc => value.checked_sub(step),
		}?;

		if &next == value {
			None
		} else {
			Some(next)
		}
	}
}

fn normalize_bound(column: &str, ty: Type, bound: &str, value: Option<Value>) -> crate::Result<Option<Value>> {
	let Some(value) = value.filter(|v| !v.is_undefined()) else {
		return Ok(None);
	};

	if !value.get_type().is_number() {
		return_error!(fill_bound_not_numeric(column, ty, bound, &value));
	}

	if ty.is_unsigned_integer() && value.is_negative() {
		return_error!(negative_fill_bound(column, ty, bound, &value));
	}

	match value.convert_to(ty) {
		Some(converted) => Ok(Some(converted)),
		None => err!(unrepresentable_fill_bound(column, ty, bound, &value)),
	}
}

fn normalize_step(column: &str, ty: Type, value: Option<Value>) -> crate::Result<Value> {
	let Some(value) = value.filter(|v| !v.is_undefined()) else {
		return Value::one(ty).ok_or_else(|| error!(invalid_fill_column_type(column, ty)));
	};

	if !value.get_type().is_number() {
		return_error!(fill_bound_not_numeric(column, ty, "step", &value));
	}

	if value.is_negative() || value.is_zero() {
		return_error!(degenerate_fill_step(column, ty, &value));
	}

	match value.convert_to(ty) {
		Some(converted) if !converted.is_zero() => Ok(converted),
		_ => err!(degenerate_fill_step(column, ty, &value)),
	}
}

/// Fill description bound to a concrete input layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPlan {
	dimensions: Vec<FillDimension>,
	passthrough: Vec<usize>,
	width: usize,
}

impl FillPlan {
	pub fn new(specs: Vec<FillSpec>, layout: &ColumnsLayout) -> crate::Result<Self> {
		let mut is_key = vec![false; layout.len()];
		let mut dimensions = Vec::with_capacity(specs.len());

		for spec in specs {
			let Some(position) = layout.position(&spec.column) else {
				return_error!(column_not_found(&spec.column));
			};
			if is_key[position] {
				return_error!(duplicate_fill_column(&spec.column));
			}
			is_key[position] = true;

			let ty = layout.columns[position].ty;
			dimensions.push(FillDimension::new(spec, position, ty)?);
		}

		let passthrough = is_key.iter().enumerate().filter(|(_, key)| !**key).map(|(idx, _)| idx).collect();

		debug!(
			keys = dimensions.len(),
			fill = dimensions.iter().filter(|d| d.is_fill()).count(),
			"fill plan created"
		);

		Ok(Self {
			dimensions,
			passthrough,
			width: layout.len(),
		})
	}

	pub fn dimensions(&self) -> &[FillDimension] {
		&self.dimensions
	}

	pub fn dimension(&self, idx: usize) -> &FillDimension {
		&self.dimensions[idx]
	}

	pub fn len(&self) -> usize {
		self.dimensions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dimensions.is_empty()
	}

	/// Input positions of the key columns, in priority order.
	pub fn key_positions(&self) -> impl Iterator<Item = usize> + '_ {
		self.dimensions.iter().map(|d| d.position)
	}

	/// Input positions of all other columns, in layout order.
	pub fn passthrough_positions(&self) -> &[usize] {
		&self.passthrough
	}

	/// Number of columns of the input layout.
	pub fn width(&self) -> usize {
		self.width
	}
}
