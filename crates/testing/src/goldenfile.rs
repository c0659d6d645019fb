// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	env,
	fs,
	io::{self, Write},
	path::{Path, PathBuf},
};

/// Set to `1` to overwrite golden files with the generated output.
pub const UPDATE_ENV: &str = "UPDATE_TESTFILES";

/// Hands out golden files rooted at one directory.
pub struct Mint {
	dir: PathBuf,
}

impl Mint {
	pub fn new(dir: impl AsRef<Path>) -> Self {
		Self {
			dir: dir.as_ref().to_path_buf(),
		}
	}

	pub fn new_goldenfile(&self, name: impl AsRef<Path>) -> io::Result<Goldenfile> {
		let path = self.dir.join(name);
		let expected = match fs::read_to_string(&path) {
			Ok(content) => Some(content),
			Err(err) if err.kind() == io::ErrorKind::NotFound => None,
			Err(err) => return Err(err),
		};
		Ok(Goldenfile {
			path,
			expected,
			actual: Vec::new(),
		})
	}
}

/// Collects written output and compares it against the file on drop.
///
/// Panics on drop when the output differs, unless [`UPDATE_ENV`] is set in
/// which case the file is rewritten.
pub struct Goldenfile {
	path: PathBuf,
	expected: Option<String>,
	actual: Vec<u8>,
}

impl Write for Goldenfile {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.actual.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Drop for Goldenfile {
	fn drop(&mut self) {
		let actual = String::from_utf8_lossy(&self.actual).into_owned();
		if self.expected.as_deref() == Some(actual.as_str()) {
			return;
		}

		if env::var(UPDATE_ENV).as_deref() == Ok("1") {
			if let Err(err) = fs::write(&self.path, actual.as_bytes()) {
				panic!("failed to update golden file {}: {err}", self.path.display());
			}
			return;
		}

		if std::thread::panicking() {
			return;
		}

		let expected = self.expected.as_deref().unwrap_or("");
		panic!("golden file {} does not match\n{}", self.path.display(), diff(expected, &actual));
	}
}

/// Line based listing of the first lines that differ.
fn diff(expected: &str, actual: &str) -> String {
	let mut result = String::new();
	let expected: Vec<&str> = expected.lines().collect();
	let actual: Vec<&str> = actual.lines().collect();

	for idx in 0..expected.len().max(actual.len()) {
		let l = expected.get(idx).copied();
		let r = actual.get(idx).copied();
		if l == r {
			continue;
		}
		result.push_str(&format!("line {}:\n- {}\n+ {}\n", idx + 1, l.unwrap_or("<missing>"), r.unwrap_or("<missing>")));
		if result.lines().count() > 30 {
			result.push_str("...\n");
			break;
		}
	}
	result
}
