// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	pub fn is_asc(&self) -> bool {
		matches!(self, SortDirection::Asc)
	}
}

impl Display for SortDirection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SortDirection::Asc => f.write_str("ASC"),
			SortDirection::Desc => f.write_str("DESC"),
		}
	}
}

impl FromStr for SortDirection {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"asc" => Ok(SortDirection::Asc),
			"desc" => Ok(SortDirection::Desc),
			_ => Err(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse() {
		assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
		assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
		assert!("up".parse::<SortDirection>().is_err());
	}

	#[test]
	fn test_serde() {
		assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"Desc\"");
		let parsed: SortDirection = serde_json::from_str("\"Asc\"").unwrap();
		assert_eq!(parsed, SortDirection::Asc);
	}
}
