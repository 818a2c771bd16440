use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{RunStatistics, SubSession};

/// Names one of the two runs of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunSlot {
    Primary,
    Secondary,
}

impl RunSlot {
    pub fn other(self) -> Self {
        match self {
            RunSlot::Primary => RunSlot::Secondary,
            RunSlot::Secondary => RunSlot::Primary,
        }
    }
}

impl Display for RunSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunSlot::Primary => f.write_str("primary"),
            RunSlot::Secondary => f.write_str("secondary"),
        }
    }
}

/// The result of racing two algorithm runs against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOutcome {
    pub winner: RunSlot,
    /// Milliseconds between the two finishing times.
    pub time_difference: f64,
    /// `time_difference` as a percentage of the slower run.
    pub percentage_difference: f64,
    pub insights: Vec<String>,
    pub primary: RunStatistics,
    pub secondary: RunStatistics,
}

impl ComparisonOutcome {
    /// Decides the race between two finished runs.
    ///
    /// The faster run wins and a tie goes to the primary run. Both returned statistics carry their
    /// `is_winner` flag.
    ///
    /// # Errors
    ///
    /// [`Error::InconsistentResult`] if either run has not finished,
    /// [`Error::InconsistentTimestamps`] if either run ends before it starts, and
    /// [`Error::InvalidDifference`] if the two elapsed times are too far apart to subtract.
    pub fn from_runs(primary: &SubSession, secondary: &SubSession) -> Result<Self> {
        primary.stats.check_timestamps()?;
        secondary.stats.check_timestamps()?;

        let elapsed = |slot: RunSlot, run: &SubSession| {
            run.stats.elapsed_ms().ok_or_else(|| {
                Error::InconsistentResult(format!("the {slot} run has not finished"))
            })
        };
        let primary_ms = elapsed(RunSlot::Primary, primary)?;
        let secondary_ms = elapsed(RunSlot::Secondary, secondary)?;

        let winner = if primary_ms <= secondary_ms {
            RunSlot::Primary
        } else {
            RunSlot::Secondary
        };

        let slower = primary_ms.max(secondary_ms);
        let time_difference = (primary_ms - secondary_ms).abs();
        if !time_difference.is_finite() {
            return Err(Error::InvalidDifference(time_difference));
        }
        let percentage_difference = if slower == 0.0 {
            0.0
        } else {
            time_difference / slower * 100.0
        };

        let mut outcome = ComparisonOutcome {
            winner,
            time_difference,
            percentage_difference,
            insights: Vec::new(),
            primary: primary.stats.clone(),
            secondary: secondary.stats.clone(),
        };
        outcome.primary.is_winner = Some(winner == RunSlot::Primary);
        outcome.secondary.is_winner = Some(winner == RunSlot::Secondary);
        outcome.insights = insights(&outcome, primary, secondary);

        Ok(outcome)
    }

    pub fn stats(&self, slot: RunSlot) -> &RunStatistics {
        match slot {
            RunSlot::Primary => &self.primary,
            RunSlot::Secondary => &self.secondary,
        }
    }

    pub fn winner_stats(&self) -> &RunStatistics {
        self.stats(self.winner)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if !self.time_difference.is_finite() || self.time_difference < 0.0 {
            return Err(Error::InvalidDifference(self.time_difference));
        }
        if !self.percentage_difference.is_finite() {
            return Err(Error::InvalidDifference(self.percentage_difference));
        }

        self.primary.check_timestamps()?;
        self.secondary.check_timestamps()?;

        for slot in [RunSlot::Primary, RunSlot::Secondary] {
            let expected = slot == self.winner;
            if let Some(flag) = self.stats(slot).is_winner {
                if flag != expected {
                    return Err(Error::InconsistentResult(format!(
                        "the {slot} run is flagged `isWinner: {flag}` but the winner is {}",
                        self.winner
                    )));
                }
            }
        }

        Ok(())
    }
}

fn label(slot: RunSlot, run: &SubSession) -> String {
    format!("{} ({slot})", run.algorithm.name())
}

fn insights(
    outcome: &ComparisonOutcome,
    primary: &SubSession,
    secondary: &SubSession,
) -> Vec<String> {
    let run = |slot: RunSlot| match slot {
        RunSlot::Primary => primary,
        RunSlot::Secondary => secondary,
    };
    let winner = outcome.winner;
    let loser = winner.other();

    let mut insights = Vec::new();

    if outcome.time_difference == 0.0 {
        insights.push(format!(
            "{} and {} finished in the same time; the tie goes to the primary run.",
            label(winner, run(winner)),
            label(loser, run(loser)),
        ));
    } else {
        insights.push(format!(
            "{} finished {} ms ahead of {} ({:.1}% faster).",
            label(winner, run(winner)),
            outcome.time_difference,
            label(loser, run(loser)),
            outcome.percentage_difference,
        ));
    }

    let counts = [
        ("comparisons", outcome.primary.comparisons, outcome.secondary.comparisons),
        ("swaps", outcome.primary.swaps, outcome.secondary.swaps),
    ];
    for (what, p, s) in counts {
        if p == s {
            continue;
        }
        let (fewer, less, more) = if p < s {
            (RunSlot::Primary, p, s)
        } else {
            (RunSlot::Secondary, s, p)
        };
        insights.push(format!(
            "{} made {} fewer {what} ({less} vs {more}).",
            label(fewer, run(fewer)),
            more - less,
        ));
    }

    insights
}
