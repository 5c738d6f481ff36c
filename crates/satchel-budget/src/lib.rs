//! # satchel-budget
//!
//! The terminal consumer of the satchel pipeline: given a priority-ordered
//! candidate sequence and a hard token budget, select the subset that fits.
//! The walk is greedy and skip-not-stop — an entity that would overflow is
//! passed over, not stopped on, so later, smaller entities may still fit.
//! Composes across multiple independently-budgeted sources into one global
//! allocation that never exceeds the total budget.

pub mod allocation;
pub mod fitter;
pub mod options;

pub use fitter::BudgetFitter;
pub use options::FitOptions;
