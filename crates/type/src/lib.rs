// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{
	Error,
	diagnostic::{Diagnostic, DiagnosticColumn, render::DefaultRenderer},
};
pub use value::{
	OrderedF32, OrderedF64, Value,
	number::{SafeAdd, SafeSub},
	r#type::Type,
};

pub type Result<T> = std::result::Result<T, Error>;
