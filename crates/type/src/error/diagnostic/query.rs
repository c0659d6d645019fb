// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::diagnostic::{Diagnostic, DiagnosticColumn},
	value::r#type::Type,
};

pub fn column_not_found(name: &str) -> Diagnostic {
	Diagnostic {
		code: "QUERY_001".to_string(),
		message: format!("column `{}` not found", name),
		column: None,
		label: Some("this column does not exist in the input".to_string()),
		help: Some("check for typos or ensure the column is produced by the input".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn query_cancelled() -> Diagnostic {
	Diagnostic {
		code: "QUERY_002".to_string(),
		message: "query was cancelled".to_string(),
		column: None,
		label: None,
		help: None,
		notes: vec!["the interrupt flag was raised while the query was executing".to_string()],
		cause: None,
	}
}

pub fn column_type_mismatch(name: &str, expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "QUERY_003".to_string(),
		message: format!("column `{}` changed type from {} to {} between batches", name, expected, actual),
		column: Some(DiagnosticColumn {
			name: name.to_string(),
			r#type: expected,
		}),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn row_length_mismatch(row: usize, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "QUERY_004".to_string(),
		message: format!("inline row {} has {} values but the layout declares {} columns", row, actual, expected),
		column: None,
		label: None,
		help: Some("every inline row needs exactly one value per column".to_string()),
		notes: vec![],
		cause: None,
	}
}
