use crate::error::Result;
use crate::{ComparisonOutcome, RunStatistics, SubSession, VisualizationSession};

/// Checks a value against the invariants of the schema.
///
/// The fields of every schema type are public so a driver can update them freely while animating.
/// `validate` is how it finds out afterwards that it broke something.
///
/// # Usage
///```
/// use orst_schema::{Error, RunStatistics, Validate};
///
/// let stats = RunStatistics {
///     start_time: Some(100.0),
///     end_time: Some(50.0),
///     ..RunStatistics::default()
/// };
///
/// assert_eq!(
///     stats.validate(),
///     Err(Error::InconsistentTimestamps { start: Some(100.0), end: 50.0 })
/// );
///```
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for RunStatistics {
    fn validate(&self) -> Result<()> {
        self.check_timestamps()
    }
}

impl Validate for ComparisonOutcome {
    fn validate(&self) -> Result<()> {
        self.check()
    }
}

/// A lone sub-session is reported as the primary run.
impl Validate for SubSession {
    fn validate(&self) -> Result<()> {
        self.check("primary")
    }
}

impl Validate for VisualizationSession {
    fn validate(&self) -> Result<()> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, RunSlot, SessionConfig, SortingAlgorithm, ViewMode};

    #[test]
    fn end_without_start() {
        let stats = RunStatistics {
            end_time: Some(5.0),
            ..RunStatistics::default()
        };
        assert_eq!(
            stats.validate(),
            Err(Error::InconsistentTimestamps {
                start: None,
                end: 5.0
            })
        );
    }

    #[test]
    fn result_while_unsorted() {
        let mut session = VisualizationSession::new(SessionConfig {
            view_mode: ViewMode::Compare,
            array_size: 3,
            ..SessionConfig::default()
        });
        for slot in [RunSlot::Primary, RunSlot::Secondary] {
            let run = session.sub_session_mut(slot);
            run.stats.start(0.0);
            run.stats.finish(10.0).unwrap();
            run.mark_sorted();
        }
        session.publish_results().unwrap();
        assert!(session.validate().is_ok());

        session.primary.is_sorted = false;
        assert_eq!(
            session.validate(),
            Err(Error::InconsistentResult(
                "a comparison result is present while the primary run is unsorted".to_string()
            ))
        );

        session.primary.is_sorted = true;
        session.show_results = false;
        assert!(matches!(
            session.validate(),
            Err(Error::InconsistentResult(_))
        ));
    }

    #[test]
    fn speed_and_size() {
        let mut session = VisualizationSession::default();

        session.speed = 0.0;
        assert_eq!(session.validate(), Err(Error::InvalidSpeed(0.0)));

        session.speed = f64::INFINITY;
        assert!(matches!(session.validate(), Err(Error::InvalidSpeed(_))));

        session.speed = 1.0;
        session.array_size = 0;
        assert_eq!(session.validate(), Err(Error::InvalidArraySize));
    }

    #[test]
    fn lone_sub_session() {
        let mut run = SubSession::new(SortingAlgorithm::Shell, [1, 2, 3]);
        assert!(run.validate().is_ok());

        run.current_indices.push(3);
        assert_eq!(
            run.validate(),
            Err(Error::IndexOutOfBounds {
                run: "primary",
                index: 3,
                len: 3
            })
        );
    }
}
