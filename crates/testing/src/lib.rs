// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod goldenfile;
pub mod testscript;
pub mod tracing;
