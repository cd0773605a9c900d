//! Weighted performance index computation

use crate::core::error::IndexError;
use crate::core::models::HistoryEntry;

/// Minimum grade at which a course counts as approved (IAP eligibility)
pub const APPROVAL_CUTOFF: f64 = 6.0;

/// Highest grade on the official scale
pub const GRADE_MAX: f64 = 10.0;

/// The three performance indices derived from one combined entry sequence
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicIndexes {
    /// Cumulative index over all entries
    pub iaa: f64,
    /// Index over the current term's entries only; `None` when the term
    /// contributed no entries
    pub ia: Option<f64>,
    /// Index over approved entries (grade >= [`APPROVAL_CUTOFF`]); `None`
    /// when no entry qualifies
    pub iap: Option<f64>,
}

impl AcademicIndexes {
    /// Compute IAA, IA, and IAP from the baseline and the current term's
    /// entries. The two slices together form the combined sequence; IA is
    /// restricted to `term`, IAP to the approved subset of both.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::ZeroHours`] if the combined sequence carries no
    /// weighted hours at all.
    pub fn compute(baseline: &[HistoryEntry], term: &[HistoryEntry]) -> Result<Self, IndexError> {
        let combined: Vec<HistoryEntry> = baseline.iter().chain(term.iter()).copied().collect();

        let iaa = compute_index(&combined)?;

        let ia = if term.is_empty() {
            None
        } else {
            Some(compute_index(term)?)
        };

        let approved: Vec<HistoryEntry> = combined
            .iter()
            .filter(|entry| entry.grade >= APPROVAL_CUTOFF)
            .copied()
            .collect();
        let iap = if approved.is_empty() {
            None
        } else {
            Some(compute_index(&approved)?)
        };

        Ok(Self { iaa, ia, iap })
    }
}

/// Compute the weighted-mean index over a sequence of history entries.
///
/// The index is `(sum of hours * grade) / (sum of hours)`, kept at full
/// precision; truncation to two decimals happens only at display time via
/// [`format_index`].
///
/// # Errors
///
/// Returns [`IndexError::ZeroHours`] if the entries sum to zero weighted
/// hours (which includes the empty sequence).
pub fn compute_index(entries: &[HistoryEntry]) -> Result<f64, IndexError> {
    let total_hours: u32 = entries.iter().map(|entry| entry.hours).sum();
    if total_hours == 0 {
        return Err(IndexError::ZeroHours);
    }

    let total_weight: f64 = entries.iter().map(HistoryEntry::weight).sum();
    Ok(total_weight / f64::from(total_hours))
}

/// Round a grade to the nearest legally recognized half-point.
///
/// The official rule: a fractional part below `.25` rounds down to the whole
/// grade, `.25` up to (but excluding) `.75` rounds to the half, and `.75` or
/// above rounds up to the next whole grade. Applied to user-entered
/// hypothetical grades before they join a computation; grades coming from
/// the transcript are already on the half-point grid.
#[must_use]
pub fn round_official(grade: f64) -> f64 {
    let whole = grade.floor();
    let fraction = grade - whole;

    if fraction < 0.25 {
        whole
    } else if fraction < 0.75 {
        whole + 0.5
    } else {
        whole + 1.0
    }
}

/// Format an index for display, truncated (not rounded) to two decimals
#[must_use]
pub fn format_index(value: f64) -> String {
    let truncated = (value * 100.0).trunc() / 100.0;
    format!("{truncated:.2}")
}
