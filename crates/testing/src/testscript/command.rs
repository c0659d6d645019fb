// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::VecDeque, error::Error};

/// A block of commands with a shared output section.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
	/// The commands part of the block as written, including comments.
	pub literal: String,
	pub commands: Vec<Command>,
	pub line_number: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	/// Wrapped in `( )`: the output is discarded.
	pub silent: bool,
	/// Prefixed with `!`: the command is expected to fail.
	pub fail: bool,
	pub line_number: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

impl Argument {
	pub fn name(&self) -> &str {
		self.key.as_deref().unwrap_or(&self.value)
	}

	pub fn parse<T: std::str::FromStr>(&self) -> Result<T, Box<dyn Error>> {
		self.value.parse().map_err(|_| format!("invalid value '{}' for {}", self.value, self.name()).into())
	}
}

impl Command {
	pub fn consume_args(&self) -> ArgumentConsumer<'_> {
		ArgumentConsumer::new(&self.args)
	}
}

/// Takes arguments off a command one at a time.
pub struct ArgumentConsumer<'a> {
	args: VecDeque<&'a Argument>,
}

impl<'a> ArgumentConsumer<'a> {
	fn new(args: &'a [Argument]) -> Self {
		Self {
			args: args.iter().collect(),
		}
	}

	/// The next positional argument.
	pub fn next_pos(&mut self) -> Option<&'a Argument> {
		let idx = self.args.iter().position(|a| a.key.is_none())?;
		self.args.remove(idx)
	}

	/// All remaining positional arguments.
	pub fn rest_pos(&mut self) -> Vec<&'a Argument> {
		let (pos, keyed): (Vec<_>, Vec<_>) = self.args.drain(..).partition(|a| a.key.is_none());
		self.args = keyed.into();
		pos
	}

	/// The last argument with the given key; earlier ones are dropped too.
	pub fn lookup(&mut self, key: &str) -> Option<&'a Argument> {
		let mut found = None;
		self.args.retain(|a| {
			if a.key.as_deref() == Some(key) {
				found = Some(*a);
				false
			} else {
				true
			}
		});
		found
	}

	pub fn lookup_parse<T: std::str::FromStr>(&mut self, key: &str) -> Result<Option<T>, Box<dyn Error>> {
		self.lookup(key).map(|a| a.parse()).transpose()
	}

	/// Fails if any argument was not consumed.
	pub fn reject_rest(&self) -> Result<(), Box<dyn Error>> {
		match self.args.front() {
			Some(arg) => Err(format!("unexpected argument '{}'", arg.name()).into()),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn arg(key: Option<&str>, value: &str) -> Argument {
		Argument {
			key: key.map(str::to_string),
			value: value.to_string(),
		}
	}

	#[test]
	fn test_consume() {
		let command = Command {
			name: "key".to_string(),
			args: vec![arg(None, "ts"), arg(Some("to"), "5"), arg(None, "asc"), arg(Some("to"), "7")],
			silent: false,
			fail: false,
			line_number: 1,
		};

		let mut args = command.consume_args();
		assert_eq!(args.next_pos().unwrap().value, "ts");
		assert_eq!(args.lookup_parse::<i64>("to").unwrap(), Some(7));
		assert!(args.reject_rest().is_err());
		assert_eq!(args.rest_pos().len(), 1);
		assert!(args.reject_rest().is_ok());
		assert_eq!(args.next_pos(), None);
	}
}
