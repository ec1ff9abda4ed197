//! Period summary returned by the finance backend.

use serde::Deserialize;

/// Income, expense and balance totals for a period.
///
/// The balance comes from the backend as-is and is never recomputed by the
/// bot.
#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    /// Total income for the period.
    pub incomes: f64,

    /// Total expenses for the period.
    pub expenses: f64,

    /// Balance as computed by the backend.
    pub balance: f64,
}
