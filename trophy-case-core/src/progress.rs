//! Completion math for achievement sets.
//!
//! Percentages mix truncation and rounding: the completion and hardcore
//! percentages truncate while the hardcore proportion rounds. The mix is
//! long-standing observed behavior that downstream displays depend on, so
//! it is reproduced exactly rather than unified.

use serde::Serialize;

/// Raw earned/total counts for one player on one achievement set.
///
/// The casual count arrives signed because upstream data anomalies can
/// produce negatives; it is clamped to zero during computation. The
/// hardcore count is trusted to be within the total by caller contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStats {
    pub total: u32,
    pub earned_casual: i64,
    pub earned_hardcore: u32,
}

impl CompletionStats {
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::compute(self.total, self.earned_casual, self.earned_hardcore)
    }
}

/// Badge tier awarded once every achievement in a set is earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    /// Set not finished (or empty).
    None,
    /// Every achievement earned, but not all in hardcore.
    Completed,
    /// Every achievement earned in hardcore.
    Mastered,
}

/// Percentages and badge tier derived from raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    /// Truncated percentage of achievements earned in either mode.
    pub pct_complete: u32,
    /// Truncated percentage of the set earned in hardcore.
    pub pct_hardcore: u32,
    /// Rounded share of earned achievements that were hardcore unlocks.
    pub pct_hardcore_proportion: u32,
    pub badge: BadgeTier,
}

impl ProgressSummary {
    /// Compute the display percentages and badge tier for a set.
    ///
    /// An empty set yields all zeroes and no badge.
    pub fn compute(total: u32, earned_casual: i64, earned_hardcore: u32) -> Self {
        let casual = earned_casual.max(0) as u64;
        let hardcore = u64::from(earned_hardcore);

        if total == 0 {
            return Self {
                pct_complete: 0,
                pct_hardcore: 0,
                pct_hardcore_proportion: 0,
                badge: BadgeTier::None,
            };
        }

        let total = u64::from(total);
        let earned_total = casual + hardcore;
        let pct_complete = (earned_total * 100 / total) as u32;
        let pct_hardcore = (hardcore * 100 / total) as u32;
        let pct_hardcore_proportion = if hardcore > 0 {
            (hardcore as f64 * 100.0 / earned_total as f64).round() as u32
        } else {
            0
        };

        let badge = if earned_total >= total {
            if pct_hardcore_proportion == 100 {
                BadgeTier::Mastered
            } else {
                BadgeTier::Completed
            }
        } else {
            BadgeTier::None
        };

        Self {
            pct_complete,
            pct_hardcore,
            pct_hardcore_proportion,
            badge,
        }
    }

    /// Whether the set was fully earned in hardcore.
    pub fn is_mastered(&self) -> bool {
        self.badge == BadgeTier::Mastered
    }

    /// Display label under the progress bar.
    pub fn label(&self) -> String {
        if self.pct_hardcore >= 100 {
            "Mastered".to_string()
        } else {
            format!("{}% complete", self.pct_complete)
        }
    }
}
