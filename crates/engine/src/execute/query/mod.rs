// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub(crate) mod compile;
pub mod fill;
pub(crate) mod inline;
