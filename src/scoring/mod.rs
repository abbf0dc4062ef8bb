// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how texts and records get their numbers.
//!
//! `core` scores one text against one query. `ranking` is the layer above it:
//! weighted fields per record, field filters, ordering and pagination.

mod core;
pub mod ranking;

pub use self::core::*;
