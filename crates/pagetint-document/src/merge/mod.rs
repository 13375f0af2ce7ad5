// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Merge module — natural-order image collection and PDF concatenation.

pub mod aggregator;
pub mod natural_sort;

pub use aggregator::NaturalOrderAggregator;
pub use natural_sort::NaturalSortKey;
