//! Achievable-range solver for the cumulative index
//!
//! Given the fixed baseline and the set of in-progress courses, bounds the
//! cumulative index over every combination of future grades drawn from the
//! official half-point scale `{0, 0.5, ..., 10.0}`.

use crate::core::error::IndexError;
use crate::core::indexes::{compute_index, GRADE_MAX};
use crate::core::models::{HistoryEntry, InProgressCourse};

/// The extreme cumulative-index values reachable this term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexBounds {
    /// Lowest achievable index (every unknown grade at 0)
    pub min: f64,
    /// Highest achievable index (every unknown grade at 10)
    pub max: f64,
}

impl IndexBounds {
    /// Bound the cumulative index over all possible future grades.
    ///
    /// The index `(S + sum of g_j * hours_j) / (T + sum of hours_j)` is
    /// strictly increasing in every unknown grade `g_j` independently, so the
    /// extremes sit at the all-zeros and all-tens corners of the grade grid;
    /// the full Cartesian enumeration would produce the same two values.
    ///
    /// With no in-progress courses the bounds collapse to the baseline index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::ZeroHours`] when the baseline carries no
    /// weighted hours.
    pub fn solve(
        baseline: &[HistoryEntry],
        in_progress: &[InProgressCourse],
    ) -> Result<Self, IndexError> {
        let current = compute_index(baseline)?;

        if in_progress.is_empty() {
            return Ok(Self {
                min: current,
                max: current,
            });
        }

        let base_weight: f64 = baseline.iter().map(HistoryEntry::weight).sum();
        let base_hours: u32 = baseline.iter().map(|entry| entry.hours).sum();
        let extra_hours: u32 = in_progress.iter().map(|course| course.hours).sum();
        let total_hours = f64::from(base_hours + extra_hours);

        Ok(Self {
            min: base_weight / total_hours,
            max: (base_weight + GRADE_MAX * f64::from(extra_hours)) / total_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::indexes::format_index;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn baseline() -> Vec<HistoryEntry> {
        vec![HistoryEntry::new(60, 7.5), HistoryEntry::new(40, 8.0)]
    }

    fn course(name: &str, hours: u32) -> InProgressCourse {
        InProgressCourse::new(name.to_string(), hours)
    }

    /// Reference oracle: enumerate the full grade grid (21^k combinations)
    /// and reduce with min/max.
    fn brute_force_bounds(history: &[HistoryEntry], courses: &[InProgressCourse]) -> (f64, f64) {
        let base_weight: f64 = history.iter().map(HistoryEntry::weight).sum();
        let base_hours: u32 = history.iter().map(|entry| entry.hours).sum();
        let extra_hours: u32 = courses.iter().map(|course| course.hours).sum();
        let total_hours = f64::from(base_hours + extra_hours);

        let mut contributions = vec![0.0_f64];
        for course in courses {
            contributions = contributions
                .iter()
                .flat_map(|&sum| {
                    (0..=20).map(move |step| {
                        sum + f64::from(step) * 0.5 * f64::from(course.hours)
                    })
                })
                .collect();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for contribution in contributions {
            let index = (base_weight + contribution) / total_hours;
            min = min.min(index);
            max = max.max(index);
        }
        (min, max)
    }

    #[test]
    fn matches_worked_example() {
        let bounds = IndexBounds::solve(&baseline(), &[course("X", 18)]).expect("bounds");

        // (770 + 0) / 118 and (770 + 180) / 118
        assert_eq!(format_index(bounds.min), "6.52");
        assert_eq!(format_index(bounds.max), "8.05");
    }

    #[test]
    fn collapses_without_in_progress_courses() {
        let bounds = IndexBounds::solve(&baseline(), &[]).expect("bounds");

        assert!((bounds.min - 7.7).abs() < 1e-12);
        assert!((bounds.max - 7.7).abs() < 1e-12);
    }

    #[test]
    fn refuses_empty_baseline() {
        let result = IndexBounds::solve(&[], &[course("X", 18)]);

        assert_eq!(result, Err(IndexError::ZeroHours));
    }

    #[test]
    fn agrees_with_brute_force_for_one_course() {
        let courses = vec![course("A", 54)];

        let bounds = IndexBounds::solve(&baseline(), &courses).expect("bounds");
        let (min, max) = brute_force_bounds(&baseline(), &courses);

        assert_eq!(format_index(bounds.min), format_index(min));
        assert_eq!(format_index(bounds.max), format_index(max));
    }

    #[test]
    fn agrees_with_brute_force_for_two_courses() {
        let courses = vec![course("A", 36), course("B", 90)];

        let bounds = IndexBounds::solve(&baseline(), &courses).expect("bounds");
        let (min, max) = brute_force_bounds(&baseline(), &courses);

        assert_eq!(format_index(bounds.min), format_index(min));
        assert_eq!(format_index(bounds.max), format_index(max));
    }

    #[test]
    fn agrees_with_brute_force_for_three_courses() {
        let courses = vec![course("A", 18), course("B", 72), course("C", 108)];

        let bounds = IndexBounds::solve(&baseline(), &courses).expect("bounds");
        let (min, max) = brute_force_bounds(&baseline(), &courses);

        assert_eq!(format_index(bounds.min), format_index(min));
        assert_eq!(format_index(bounds.max), format_index(max));
    }

    #[quickcheck]
    fn min_never_exceeds_max(history_raw: Vec<(u8, u8)>, course_hours: Vec<u8>) -> TestResult {
        if history_raw.is_empty() {
            return TestResult::discard();
        }

        let history: Vec<HistoryEntry> = history_raw
            .iter()
            .map(|&(hours, grade_step)| {
                HistoryEntry::new(u32::from(hours % 200) + 1, f64::from(grade_step % 21) * 0.5)
            })
            .collect();
        let courses: Vec<InProgressCourse> = course_hours
            .iter()
            .enumerate()
            .map(|(i, &hours)| InProgressCourse::new(format!("C{i}"), u32::from(hours % 200) + 1))
            .collect();

        let bounds = IndexBounds::solve(&history, &courses).expect("positive hours");
        TestResult::from_bool(bounds.min <= bounds.max)
    }

    #[quickcheck]
    fn oracle_agreement_up_to_three_courses(
        history_raw: Vec<(u8, u8)>,
        course_hours: Vec<u8>,
    ) -> TestResult {
        if history_raw.is_empty() || course_hours.len() > 3 {
            return TestResult::discard();
        }

        let history: Vec<HistoryEntry> = history_raw
            .iter()
            .map(|&(hours, grade_step)| {
                HistoryEntry::new(u32::from(hours % 200) + 1, f64::from(grade_step % 21) * 0.5)
            })
            .collect();
        let courses: Vec<InProgressCourse> = course_hours
            .iter()
            .enumerate()
            .map(|(i, &hours)| InProgressCourse::new(format!("C{i}"), u32::from(hours % 200) + 1))
            .collect();

        let bounds = IndexBounds::solve(&history, &courses).expect("positive hours");
        let (min, max) = brute_force_bounds(&history, &courses);

        TestResult::from_bool(
            format_index(bounds.min) == format_index(min)
                && format_index(bounds.max) == format_index(max),
        )
    }
}
