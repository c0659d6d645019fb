// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	error::Error,
	io::{self, Write as _},
	panic,
	path::Path,
};

use crate::{goldenfile::Mint, testscript::{Command, parser::parse}};

/// Runs testscript commands, returning their output.
pub trait Runner {
	/// Runs a command, returning its output or an error if it fails.
	///
	/// Commands prefixed with `!` are expected to fail; their error becomes
	/// the output of the command.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;

	/// Called at the start of a script.
	fn start_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called at the end of a script.
	fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called at the start of a block. Output is prepended to the block's
	/// output.
	fn start_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Called at the end of a block. Output is appended to the block's
	/// output.
	fn end_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}
}

/// Runs the testscript at `path`.
///
/// Panics if the generated output differs from the file. Set
/// `UPDATE_TESTFILES=1` to replace the file with the generated output.
pub fn run_path<R: Runner, P: AsRef<Path>>(runner: &mut R, path: P) -> io::Result<()> {
	let path = path.as_ref();
	let (Some(dir), Some(filename)) = (path.parent(), path.file_name()) else {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid path '{path:?}'")));
	};

	if filename.to_string_lossy().ends_with(".skip") {
		return Ok(());
	}

	let input = std::fs::read_to_string(path)?;
	let output = generate(runner, &input)?;

	Mint::new(dir).new_goldenfile(filename)?.write_all(output.as_bytes())
}

/// Generates output for a testscript without comparing it.
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> io::Result<String> {
	let mut output = String::with_capacity(input.len());

	let eol = match input.find("\r\n") {
		Some(_) => "\r\n",
		None => "\n",
	};

	let blocks = parse(input).map_err(|e| {
		io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("{e}\n{}\n{}^", e.line_text, " ".repeat(e.column.saturating_sub(1))),
		)
	})?;

	runner.start_script().map_err(|e| io::Error::other(format!("start_script failed: {e}")))?;

	for (i, block) in blocks.iter().enumerate() {
		if block.commands.is_empty() {
			output.push_str(&block.literal);
			continue;
		}

		let mut block_output = ensure_eol(
			runner.start_block().map_err(|e| {
				io::Error::other(format!("start_block failed at line {}: {e}", block.line_number))
			})?,
			eol,
		);

		for command in &block.commands {
			let run = panic::AssertUnwindSafe(|| runner.run(command));
			let command_output = match panic::catch_unwind(run) {
				Ok(Ok(output)) if command.fail => {
					return Err(io::Error::other(format!(
						"expected command '{}' to fail at line {}, succeeded with: {output}",
						command.name, command.line_number
					)));
				}
				Ok(Ok(output)) => output,
				Ok(Err(e)) if command.fail => format!("{e}"),
				Ok(Err(e)) => {
					return Err(io::Error::other(format!(
						"command '{}' failed at line {}: {e}",
						command.name, command.line_number
					)));
				}
				Err(payload) if command.fail => {
					let message = payload
						.downcast_ref::<&str>()
						.map(|s| s.to_string())
						.or_else(|| payload.downcast_ref::<String>().cloned())
						.unwrap_or_else(|| panic::resume_unwind(payload));
					format!("Panic: {message}")
				}
				Err(payload) => panic::resume_unwind(payload),
			};

			if !command.silent {
				block_output.push_str(&ensure_eol(command_output, eol));
			}
		}

		block_output.push_str(&ensure_eol(
			runner.end_block().map_err(|e| {
				io::Error::other(format!("end_block failed at line {}: {e}", block.line_number))
			})?,
			eol,
		));

		if block_output.is_empty() {
			block_output.push_str("ok");
			block_output.push_str(eol);
		}

		// blank lines would end the output early, so prefix every line
		if block_output.starts_with('\n')
			|| block_output.starts_with("\r\n")
			|| block_output.contains("\n\n")
			|| block_output.contains("\n\r\n")
		{
			block_output = format!("> {}", block_output.replace('\n', "\n> "));
			block_output.truncate(block_output.len() - 2);
		}

		output.push_str(&block.literal);
		output.push_str("---");
		output.push_str(eol);
		output.push_str(&block_output);
		if i < blocks.len() - 1 {
			output.push_str(eol);
		}
	}

	runner.end_script().map_err(|e| io::Error::other(format!("end_script failed: {e}")))?;

	Ok(output)
}

fn ensure_eol(mut s: String, eol: &str) -> String {
	if !s.is_empty() && !s.ends_with('\n') {
		s.push_str(eol);
	}
	s
}
