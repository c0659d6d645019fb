// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::diagnostic::{Diagnostic, DiagnosticColumn},
	value::{Value, r#type::Type},
};

fn column(name: &str, r#type: Type) -> Option<DiagnosticColumn> {
	Some(DiagnosticColumn {
		name: name.to_string(),
		r#type,
	})
}

pub fn invalid_fill_column_type(name: &str, r#type: Type) -> Diagnostic {
	Diagnostic {
		code: "FILL_001".to_string(),
		message: format!("WITH FILL can be used only with numeric types, but is set for column of type {}", r#type),
		column: column(name, r#type),
		label: Some("non-numeric fill column".to_string()),
		help: Some("remove the fill range from this key column or cast it to a numeric type".to_string()),
		notes: vec!["key columns without a fill range may have any type".to_string()],
		cause: None,
	}
}

pub fn negative_fill_bound(name: &str, r#type: Type, bound: &str, value: &Value) -> Diagnostic {
	Diagnostic {
		code: "FILL_002".to_string(),
		message: format!("WITH FILL bound values cannot be negative for unsigned type {}", r#type),
		column: column(name, r#type),
		label: Some(format!("{} bound is {}", bound, value)),
		help: Some("use a bound greater than or equal to zero".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn unrepresentable_fill_bound(name: &str, r#type: Type, bound: &str, value: &Value) -> Diagnostic {
	Diagnostic {
		code: "FILL_002".to_string(),
		message: format!("WITH FILL {} bound {} cannot be represented as {}", bound, value, r#type),
		column: column(name, r#type),
		label: Some(format!("{} bound is out of range", bound)),
		help: Some(format!("use a {} bound within the range of {}", bound, r#type)),
		notes: vec![],
		cause: None,
	}
}

pub fn fill_bound_not_numeric(name: &str, r#type: Type, bound: &str, value: &Value) -> Diagnostic {
	Diagnostic {
		code: "FILL_004".to_string(),
		message: format!("WITH FILL {} must be a number, got {} of type {}", bound, value, value.get_type()),
		column: column(name, r#type),
		label: Some(format!("non-numeric {}", bound)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn degenerate_fill_step(name: &str, r#type: Type, step: &Value) -> Diagnostic {
	Diagnostic {
		code: "FILL_003".to_string(),
		message: format!("WITH FILL step {} is not a valid step for type {}", step, r#type),
		column: column(name, r#type),
		label: Some("step must be a positive number".to_string()),
		help: Some("the sort direction decides whether the step is added or subtracted".to_string()),
		notes: vec!["a zero step would never advance and a negative step would never terminate".to_string()],
		cause: None,
	}
}

pub fn inverted_fill_range(name: &str, r#type: Type, direction: &str, from: &Value, to: &Value) -> Diagnostic {
	Diagnostic {
		code: "FILL_003".to_string(),
		message: format!("WITH FILL range from {} to {} cannot be filled in {} order", from, to, direction),
		column: column(name, r#type),
		label: Some("from bound lies beyond the to bound".to_string()),
		help: Some("swap the bounds or change the sort direction".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn duplicate_fill_column(name: &str) -> Diagnostic {
	Diagnostic {
		code: "FILL_005".to_string(),
		message: format!("column `{}` is used more than once as a fill key", name),
		column: None,
		label: Some("duplicate key column".to_string()),
		help: Some("each key column may appear only once in the fill description".to_string()),
		notes: vec![],
		cause: None,
	}
}
