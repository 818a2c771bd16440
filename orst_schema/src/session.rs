//! The in-memory state of a visualization session.
//!
//! A session always tracks two [`SubSession`]s. In [`ViewMode::Single`] only the primary one is
//! shown; in [`ViewMode::Compare`] both race side by side and, once both are sorted, the result of
//! the race can be published with [`VisualizationSession::publish_results`].
//!
//! The run shown in single view is also kept at the top level of the JSON (`algorithm`, `array`,
//! `stats`, `currentIndices`, `isSorted`) as [`VisualizationSession::current`].
//!
//! # Example
//!
//! ```
//! use orst_schema::{SessionConfig, SortingAlgorithm, ViewMode, VisualizationSession};
//!
//! let session = VisualizationSession::new(SessionConfig {
//!     view_mode: ViewMode::Compare,
//!     primary: SortingAlgorithm::Merge,
//!     secondary: SortingAlgorithm::Heap,
//!     array_size: 20,
//!     ..SessionConfig::default()
//! });
//!
//! assert_eq!(session.primary.array.len(), 20);
//! assert_eq!(session.primary.array, session.secondary.array);
//! assert_eq!(session.current, session.primary);
//! assert!(session.comparison_result.is_none());
//! ```

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{AlgorithmInfo, ArrayBar, ComparisonOutcome, RunSlot, RunStatistics, SortingAlgorithm};

/// Smallest value a generated bar can take. Bars loaded from elsewhere may hold any number.
pub const MIN_BAR_VALUE: u32 = 1;

/// Largest value a generated bar can take.
pub const MAX_BAR_VALUE: u32 = 100;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One algorithm on screen.
    #[default]
    Single,

    /// Two algorithms racing side by side.
    Compare,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// The state of one algorithm run inside a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubSession {
    pub algorithm: SortingAlgorithm,
    pub array: Vec<ArrayBar>,
    pub stats: RunStatistics,
    // Indices the driver is currently highlighting.
    pub current_indices: Vec<usize>,
    pub is_sorted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_info: Option<bool>,
}

impl SubSession {
    pub fn new<I>(algorithm: SortingAlgorithm, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        Self {
            algorithm,
            array: values.into_iter().map(|v| ArrayBar::new(v.into())).collect(),
            stats: RunStatistics::new(),
            current_indices: Vec::new(),
            is_sorted: false,
            show_info: None,
        }
    }

    /// The catalog entry of the algorithm this run uses.
    pub fn info(&self) -> &'static AlgorithmInfo {
        self.algorithm.info()
    }

    /// Replaces the bars with fresh, unsorted ones and forgets the previous run.
    pub fn load<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        self.array = values.into_iter().map(|v| ArrayBar::new(v.into())).collect();
        self.stats.reset();
        self.current_indices.clear();
        self.is_sorted = false;
    }

    /// Flags every bar as sorted and drops all highlights.
    pub fn mark_sorted(&mut self) {
        for bar in &mut self.array {
            bar.clear_highlight();
            bar.is_sorted = true;
        }
        self.current_indices.clear();
        self.is_sorted = true;
    }

    /// The bar values in their current order.
    pub fn values(&self) -> Vec<f64> {
        self.array.iter().map(|bar| bar.value).collect()
    }

    /// `run` names this sub-session in the error.
    pub(crate) fn check(&self, run: &'static str) -> Result<()> {
        self.stats.check_timestamps()?;

        let len = self.array.len();
        if let Some(&index) = self.current_indices.iter().find(|&&i| i >= len) {
            return Err(Error::IndexOutOfBounds { run, index, len });
        }

        Ok(())
    }
}

/// Everything needed to set up a new [`VisualizationSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub view_mode: ViewMode,
    pub primary: SortingAlgorithm,
    pub secondary: SortingAlgorithm,
    pub speed: f64,
    pub array_size: usize,
    pub theme: Theme,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Single,
            primary: SortingAlgorithm::Bubble,
            secondary: SortingAlgorithm::Quick,
            speed: 50.0,
            array_size: 50,
            theme: Theme::Dark,
        }
    }
}

/// The whole state of the visualizer.
///
/// `comparison_result` is only ever present while `show_results` is set and both sub-sessions are
/// sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationSession {
    /// The run on screen in single view, flattened into the top level of the JSON. It mirrors
    /// `primary` after [`VisualizationSession::sync_current`].
    #[serde(flatten)]
    pub current: SubSession,
    pub view_mode: ViewMode,
    pub primary: SubSession,
    pub secondary: SubSession,
    pub is_running: bool,
    pub show_results: bool,
    pub speed: f64,
    pub array_size: usize,
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_result: Option<ComparisonOutcome>,
}

impl VisualizationSession {
    /// Creates a session whose two sub-sessions hold the same random bars.
    pub fn new(config: SessionConfig) -> Self {
        let values = random_values(config.array_size);
        let primary = SubSession::new(config.primary, values.iter().copied());

        Self {
            current: primary.clone(),
            view_mode: config.view_mode,
            primary,
            secondary: SubSession::new(config.secondary, values),
            is_running: false,
            show_results: false,
            speed: config.speed,
            array_size: config.array_size,
            theme: config.theme,
            comparison_result: None,
        }
    }

    pub fn sub_session(&self, slot: RunSlot) -> &SubSession {
        match slot {
            RunSlot::Primary => &self.primary,
            RunSlot::Secondary => &self.secondary,
        }
    }

    pub fn sub_session_mut(&mut self, slot: RunSlot) -> &mut SubSession {
        match slot {
            RunSlot::Primary => &mut self.primary,
            RunSlot::Secondary => &mut self.secondary,
        }
    }

    /// Copies the primary run into `current`. A driver calls this after each step in single view.
    pub fn sync_current(&mut self) {
        self.current.clone_from(&self.primary);
    }

    /// Whether every visible sub-session is sorted.
    pub fn all_sorted(&self) -> bool {
        match self.view_mode {
            ViewMode::Single => self.primary.is_sorted,
            ViewMode::Compare => self.primary.is_sorted && self.secondary.is_sorted,
        }
    }

    /// Deals both sub-sessions a fresh set of `array_size` random bars and hides any result.
    pub fn shuffle(&mut self) {
        let values = random_values(self.array_size);
        self.primary.load(values.iter().copied());
        self.secondary.load(values);
        self.sync_current();
        self.is_running = false;
        self.clear_results();
    }

    /// Decides the race between the two sub-sessions and shows the result.
    ///
    /// # Errors
    ///
    /// [`Error::InconsistentResult`] outside of compare mode, while either sub-session is unsorted
    /// or while either has not finished its run.
    pub fn publish_results(&mut self) -> Result<&ComparisonOutcome> {
        if self.view_mode != ViewMode::Compare {
            return Err(Error::InconsistentResult(
                "results can only be published in compare mode".to_string(),
            ));
        }
        if let Some(slot) = self.unsorted_slot() {
            return Err(Error::InconsistentResult(format!(
                "the {slot} run is not sorted yet"
            )));
        }

        let outcome = ComparisonOutcome::from_runs(&self.primary, &self.secondary)?;
        self.primary.stats.is_winner = outcome.primary.is_winner;
        self.secondary.stats.is_winner = outcome.secondary.is_winner;
        self.show_results = true;

        Ok(&*self.comparison_result.insert(outcome))
    }

    /// Hides the result of the last race.
    pub fn clear_results(&mut self) {
        self.show_results = false;
        self.comparison_result = None;
        self.primary.stats.is_winner = None;
        self.secondary.stats.is_winner = None;
    }

    fn unsorted_slot(&self) -> Option<RunSlot> {
        [RunSlot::Primary, RunSlot::Secondary]
            .into_iter()
            .find(|&slot| !self.sub_session(slot).is_sorted)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(Error::InvalidSpeed(self.speed));
        }
        if self.array_size == 0 {
            return Err(Error::InvalidArraySize);
        }

        self.current.check("current")?;
        self.primary.check("primary")?;
        self.secondary.check("secondary")?;

        if let Some(outcome) = &self.comparison_result {
            if !self.show_results {
                return Err(Error::InconsistentResult(
                    "a comparison result is present while results are hidden".to_string(),
                ));
            }
            if let Some(slot) = self.unsorted_slot() {
                return Err(Error::InconsistentResult(format!(
                    "a comparison result is present while the {slot} run is unsorted"
                )));
            }
            outcome.check()?;
        }

        Ok(())
    }
}

impl Default for VisualizationSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn random_values(n: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| rng.gen_range(MIN_BAR_VALUE..=MAX_BAR_VALUE))
        .collect()
}
