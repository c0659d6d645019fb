// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

use crate::testscript::command::{Argument, Block, Command};

#[derive(Debug, Clone)]
pub struct ParseError {
	pub message: String,
	pub line: u32,
	pub column: usize,
	pub line_text: String,
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "parse error at line {}:{}: {}", self.line, self.column, self.message)
	}
}

impl std::error::Error for ParseError {}

pub(crate) fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
	Parser::new(input).parse_blocks()
}

#[cfg(test)]
pub(crate) fn parse_command(input: &str) -> Result<Command, ParseError> {
	Parser::new(input).parse_command()
}

#[derive(Clone, Copy)]
struct Position {
	pos: usize,
	line: u32,
	column: usize,
	line_start: usize,
}

struct Parser<'a> {
	input: &'a str,
	at: Position,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Parser {
			input,
			at: Position {
				pos: 0,
				line: 1,
				column: 1,
				line_start: 0,
			},
		}
	}

	fn peek_char(&self) -> Option<char> {
		self.input[self.at.pos..].chars().next()
	}

	fn peek_second(&self) -> Option<char> {
		self.input[self.at.pos..].chars().nth(1)
	}

	fn peek_str(&self, n: usize) -> &str {
		let mut end = (self.at.pos + n).min(self.input.len());
		while end > self.at.pos && !self.input.is_char_boundary(end) {
			end -= 1;
		}
		&self.input[self.at.pos..end]
	}

	fn advance(&mut self) -> Option<char> {
		let ch = self.peek_char()?;
		self.at.pos += ch.len_utf8();
		if ch == '\n' {
			self.at.line += 1;
			self.at.column = 1;
			self.at.line_start = self.at.pos;
		} else {
			self.at.column += 1;
		}
		Some(ch)
	}

	fn skip_whitespace(&mut self) {
		while let Some(ch) = self.peek_char() {
			if !ch.is_whitespace() || ch == '\n' {
				break;
			}
			self.advance();
		}
	}

	fn skip_line(&mut self) {
		while let Some(ch) = self.advance() {
			if ch == '\n' {
				break;
			}
		}
	}

	fn is_at_end(&self) -> bool {
		self.at.pos >= self.input.len()
	}

	fn at_comment(&self) -> bool {
		self.peek_char() == Some('#') || self.peek_str(2) == "//"
	}

	fn error(&self, message: impl Into<String>) -> ParseError {
		let rest = &self.input[self.at.line_start..];
		let line_text = rest.split('\n').next().unwrap_or_default().trim_end_matches('\r');
		ParseError {
			message: message.into(),
			line: self.at.line,
			column: self.at.column,
			line_text: line_text.to_string(),
		}
	}

	fn parse_blocks(&mut self) -> Result<Vec<Block>, ParseError> {
		let mut blocks = Vec::new();
		while !self.is_at_end() {
			blocks.push(self.parse_block()?);
		}
		Ok(blocks)
	}

	fn parse_block(&mut self) -> Result<Block, ParseError> {
		let line_number = self.at.line;
		let start = self.at.pos;

		let commands = self.parse_commands()?;
		let literal = self.input[start..self.at.pos].to_string();

		// trailing comments at the end of the script
		if commands.is_empty() {
			return Ok(Block {
				literal,
				commands,
				line_number,
			});
		}

		self.parse_separator()?;
		self.skip_output();

		Ok(Block {
			literal,
			commands,
			line_number,
		})
	}

	fn parse_commands(&mut self) -> Result<Vec<Command>, ParseError> {
		let mut commands = Vec::new();

		loop {
			if self.skip_empty_or_comment_line() {
				continue;
			}
			if self.is_at_end() {
				break;
			}
			if self.peek_str(3) == "---" {
				if commands.is_empty() {
					return Err(self.error("expected command before ---"));
				}
				break;
			}
			if self.peek_char().is_some_and(char::is_whitespace) {
				return Err(self.error("command cannot start with whitespace"));
			}
			commands.push(self.parse_command()?);
		}

		Ok(commands)
	}

	fn parse_command(&mut self) -> Result<Command, ParseError> {
		let line_number = self.at.line;

		let silent = self.peek_char() == Some('(');
		if silent {
			self.advance();
			self.skip_whitespace();
		}

		let fail = self.peek_char() == Some('!');
		if fail {
			self.advance();
			self.skip_whitespace();
		}

		let name = self.parse_string().map_err(|_| self.error("expected command name"))?;

		let mut args = Vec::new();
		loop {
			self.skip_whitespace();
			if self.is_at_end() || self.peek_char() == Some('\n') || self.at_comment() {
				break;
			}
			if silent && self.peek_char() == Some(')') {
				break;
			}
			args.push(self.parse_argument()?);
		}

		if silent {
			if self.peek_char() != Some(')') {
				return Err(self.error("expected closing ) for silent command"));
			}
			self.advance();
			self.skip_whitespace();
		}

		if self.at_comment() {
			self.skip_line();
		} else if self.peek_char() == Some('\n') {
			self.advance();
		} else if !self.is_at_end() {
			return Err(self.error("expected end of line"));
		}

		Ok(Command {
			name,
			args,
			silent,
			fail,
			line_number,
		})
	}

	fn parse_argument(&mut self) -> Result<Argument, ParseError> {
		let value = self.parse_string()?;
		if self.peek_char() != Some('=') {
			return Ok(Argument {
				key: None,
				value,
			});
		}

		self.advance();
		let key = Some(value);
		match self.peek_char() {
			None | Some(')') => Ok(Argument {
				key,
				value: String::new(),
			}),
			Some(ch) if ch.is_whitespace() => Ok(Argument {
				key,
				value: String::new(),
			}),
			_ => Ok(Argument {
				key,
				value: self.parse_string()?,
			}),
		}
	}

	fn parse_string(&mut self) -> Result<String, ParseError> {
		match self.peek_char() {
			Some(quote @ ('\'' | '"')) => self.parse_quoted_string(quote),
			_ => self.parse_unquoted_string(),
		}
	}

	fn parse_unquoted_string(&mut self) -> Result<String, ParseError> {
		let mut result = String::new();

		// a leading - is only allowed for negative numbers
		match self.peek_char() {
			Some(ch) if ch.is_alphanumeric() || ch == '_' => {}
			Some('-') if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => {}
			_ => return Err(self.error("expected string")),
		}
		if let Some(ch) = self.advance() {
			result.push(ch);
		}

		while let Some(ch) = self.peek_char() {
			if !ch.is_alphanumeric() && !"_-./@:".contains(ch) {
				break;
			}
			result.push(ch);
			self.advance();
		}

		Ok(result)
	}

	fn parse_quoted_string(&mut self, quote: char) -> Result<String, ParseError> {
		let mut result = String::new();
		self.advance();

		while let Some(ch) = self.advance() {
			match ch {
				c if c == quote => return Ok(result),
				'\n' => break,
				'\\' => {
					let escaped = match self.advance() {
						Some('n') => '\n',
						Some('r') => '\r',
						Some('t') => '\t',
						Some('0') => '\0',
						Some(c @ ('\\' | '\'' | '"')) => c,
						_ => return Err(self.error("invalid escape sequence")),
					};
					result.push(escaped);
				}
				c => result.push(c),
			}
		}

		Err(self.error(format!("unterminated string (missing {quote})")))
	}

	fn skip_empty_or_comment_line(&mut self) -> bool {
		let saved = self.at;
		self.skip_whitespace();

		if self.at_comment() {
			self.skip_line();
			return true;
		}
		match self.peek_char() {
			Some('\n') => {
				self.advance();
				true
			}
			Some('\r') if self.peek_second() == Some('\n') => {
				self.advance();
				self.advance();
				true
			}
			_ => {
				self.at = saved;
				false
			}
		}
	}

	fn parse_separator(&mut self) -> Result<(), ParseError> {
		if self.peek_str(3) != "---" {
			return Err(self.error("expected --- separator"));
		}
		for _ in 0..3 {
			self.advance();
		}
		if self.peek_char() == Some('\r') {
			self.advance();
		}
		match self.peek_char() {
			Some('\n') => {
				self.advance();
				Ok(())
			}
			None => Ok(()),
			_ => Err(self.error("separator must be followed by newline or EOF")),
		}
	}

	/// Skips the expected output, which ends at a blank line or EOF.
	fn skip_output(&mut self) {
		let mut last_was_newline = true;
		while let Some(ch) = self.advance() {
			match ch {
				'\n' if last_was_newline => break,
				'\n' => last_was_newline = true,
				'\r' => {}
				_ => last_was_newline = false,
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_command_arguments() {
		let command = parse_command("key ts desc from=10 to=-3 note=\"a b\"").unwrap();
		assert_eq!(command.name, "key");
		assert!(!command.fail);
		assert!(!command.silent);

		let args: Vec<_> = command.args.iter().map(|a| (a.key.as_deref(), a.value.as_str())).collect();
		assert_eq!(
			args,
			vec![(None, "ts"), (None, "desc"), (Some("from"), "10"), (Some("to"), "-3"), (Some("note"), "a b")]
		);
	}

	#[test]
	fn test_command_markers() {
		let command = parse_command("!run # fails").unwrap();
		assert!(command.fail);
		assert_eq!(command.name, "run");
		assert!(command.args.is_empty());

		let command = parse_command("(row 1 2)").unwrap();
		assert!(command.silent);
		assert_eq!(command.args.len(), 2);

		assert!(parse_command("(row 1").is_err());
	}

	#[test]
	fn test_negative_literal() {
		let command = parse_command("row -4 -1.5").unwrap();
		assert_eq!(command.args[0].value, "-4");
		assert_eq!(command.args[1].value, "-1.5");

		assert!(parse_command("row -x").is_err());
	}

	#[test]
	fn test_blocks() {
		let input = "# leading\nrow 1\nrun\n---\n1\n2\n\n// next\nrun\n---\nok\n\n# trailing\n";
		let blocks = parse(input).unwrap();

		assert_eq!(blocks.len(), 3);
		assert_eq!(blocks[0].literal, "# leading\nrow 1\nrun\n");
		assert_eq!(blocks[0].commands.len(), 2);
		assert_eq!(blocks[0].line_number, 1);
		assert_eq!(blocks[1].literal, "// next\nrun\n");
		assert_eq!(blocks[1].commands[0].line_number, 9);
		assert!(blocks[2].commands.is_empty());
		assert_eq!(blocks[2].literal, "# trailing\n");
	}

	#[test]
	fn test_missing_separator() {
		let err = parse("run\n").unwrap_err();
		assert_eq!(err.line, 2);
		assert!(parse("---\nok\n").is_err());
	}
}
