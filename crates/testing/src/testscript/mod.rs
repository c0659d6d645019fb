// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Golden script tests: a script is a sequence of blocks, each block a list
//! of commands followed by `---` and their expected output. Running a script
//! regenerates the output and compares it against the file.
//!
//! ```text
//! # comment
//! command arg key=value "quoted arg"
//! !failing_command
//! ---
//! output
//! ```

mod command;
mod parser;
pub mod runner;

pub use command::{Argument, ArgumentConsumer, Block, Command};
pub use runner::{Runner, generate, run_path};
