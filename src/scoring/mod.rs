// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how candidate strings get their numbers.
//!
//! The scorer is a cheap O(n) heuristic, not edit distance. Exact and
//! substring matches dominate; scattered in-order character overlap gets a
//! small consolation score. At catalog sizes in the tens of entries this runs
//! comfortably on every keystroke.

mod core;

pub use core::*;
