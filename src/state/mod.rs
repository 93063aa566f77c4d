// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Outcome taxonomy.
//!
//! Every validation run ends in exactly one [`OutcomeState`]. A [`Verdict`]
//! pairs that state with the offending values its hint refers to.

mod outcome;
mod verdict;

pub use outcome::{Category, OutcomeState};
pub use verdict::Verdict;
