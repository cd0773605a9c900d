//! Interactive what-if session
//!
//! Drives repeated grade simulations against a fixed baseline. Terminal
//! access goes through the [`SessionIo`] trait so the whole loop runs
//! against a scripted double in tests.

use std::io;

use crate::core::error::SessionError;
use crate::core::indexes::{compute_index, format_index, round_official, AcademicIndexes, GRADE_MAX};
use crate::core::models::{HistoryEntry, InProgressCourse, StudentRecord};
use crate::core::range::IndexBounds;

/// Line-oriented terminal boundary for the session
pub trait SessionIo {
    /// Show a prompt and read one line of input; `None` on end of input.
    ///
    /// # Errors
    /// Returns an [`io::Error`] when the underlying channel fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Display one line of output.
    fn show(&mut self, text: &str);
}

/// Phases of the what-if loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// About to start a fresh iteration from the untouched baseline
    Ready,
    /// Soliciting one hypothetical grade per in-progress course
    Prompting,
    /// Computing the indexes over baseline plus hypotheticals
    Computing,
    /// Showing results and asking whether to go again
    Displaying,
    /// Session finished
    Done,
}

/// One interactive what-if session over a fixed student record
pub struct WhatIfSession<'a, IO: SessionIo> {
    record: &'a StudentRecord,
    in_progress: &'a [InProgressCourse],
    io: &'a mut IO,
    range_upfront: bool,
    state: SessionState,
}

impl<'a, IO: SessionIo> WhatIfSession<'a, IO> {
    /// Create a session. With `range_upfront` the achievable range is shown
    /// immediately instead of being offered as a question.
    pub fn new(
        record: &'a StudentRecord,
        in_progress: &'a [InProgressCourse],
        io: &'a mut IO,
        range_upfront: bool,
    ) -> Self {
        Self {
            record,
            in_progress,
            io,
            range_upfront,
            state: SessionState::Ready,
        }
    }

    /// Current state of the loop
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session to completion.
    ///
    /// Every iteration starts from a fresh copy of the baseline, so grades
    /// entered in one iteration never influence the next. End of input at
    /// any prompt finishes the session cleanly.
    ///
    /// # Errors
    ///
    /// Fails on a baseline with zero weighted hours, or when the I/O channel
    /// breaks. Invalid grade input is handled by re-prompting, never by
    /// returning an error.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let baseline = self.record.baseline_entries();
        let baseline_index = compute_index(&baseline)?;
        self.io.show(&format!(
            "Hello, {}! Your IAA is {}.",
            self.record.name,
            format_index(baseline_index)
        ));

        if self.in_progress.is_empty() {
            self.io
                .show("No in-progress courses this term; nothing to simulate.");
            self.state = SessionState::Done;
            return Ok(());
        }

        self.offer_range(&baseline)?;

        let mut hypotheticals: Vec<HistoryEntry> = Vec::with_capacity(self.in_progress.len());
        let mut computed: Option<AcademicIndexes> = None;

        loop {
            match self.state {
                SessionState::Ready => {
                    hypotheticals.clear();
                    self.state = SessionState::Prompting;
                }
                SessionState::Prompting => {
                    self.state = if self.collect_grades(&mut hypotheticals)? {
                        SessionState::Computing
                    } else {
                        SessionState::Done
                    };
                }
                SessionState::Computing => {
                    computed = Some(AcademicIndexes::compute(&baseline, &hypotheticals)?);
                    self.state = SessionState::Displaying;
                }
                SessionState::Displaying => {
                    if let Some(indexes) = computed.take() {
                        self.show_indexes(&indexes);
                    }
                    self.state = match self.ask("Run another simulation? [y/N]: ")? {
                        Some(true) => SessionState::Ready,
                        _ => SessionState::Done,
                    };
                }
                SessionState::Done => return Ok(()),
            }
        }
    }

    fn offer_range(&mut self, baseline: &[HistoryEntry]) -> Result<(), SessionError> {
        let wanted = self.range_upfront
            || self
                .ask("See how far your IAA can move this term? [y/N]: ")?
                .unwrap_or(false);
        if wanted {
            let bounds = IndexBounds::solve(baseline, self.in_progress)?;
            self.io.show(&format!(
                "Your IAA can range from {} to {}.",
                format_index(bounds.min),
                format_index(bounds.max)
            ));
        }
        Ok(())
    }

    /// Prompt for one grade per in-progress course, re-prompting on invalid
    /// input. Returns `false` when input ended before all grades were given.
    fn collect_grades(&mut self, hypotheticals: &mut Vec<HistoryEntry>) -> io::Result<bool> {
        for course in self.in_progress {
            let mut prompt = format!("Expected grade for {}: ", course.name);
            let grade = loop {
                let Some(line) = self.io.read_line(&prompt)? else {
                    return Ok(false);
                };
                match parse_grade(&line) {
                    Some(grade) => break grade,
                    None => prompt = format!("Invalid grade. Expected grade for {}: ", course.name),
                }
            };
            hypotheticals.push(HistoryEntry::new(course.hours, round_official(grade)));
        }
        Ok(true)
    }

    fn show_indexes(&mut self, indexes: &AcademicIndexes) {
        self.io.show("With the grades entered:");
        self.io
            .show(&format!("  IAA: {}", format_index(indexes.iaa)));
        self.io
            .show(&format!("  IA:  {}", format_or_dash(indexes.ia)));
        self.io
            .show(&format!("  IAP: {}", format_or_dash(indexes.iap)));
    }

    /// Yes/no question; `None` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        let Some(line) = self.io.read_line(prompt)? else {
            return Ok(None);
        };
        let answer = line.trim();
        Ok(Some(
            answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"),
        ))
    }
}

/// Parse and validate a hypothetical grade; `None` for anything that is not
/// a finite number on the 0-10 scale.
fn parse_grade(line: &str) -> Option<f64> {
    let grade: f64 = line.trim().parse().ok()?;
    (grade.is_finite() && (0.0..=GRADE_MAX).contains(&grade)).then_some(grade)
}

fn format_or_dash(value: Option<f64>) -> String {
    value.map_or_else(|| "--".to_string(), format_index)
}
