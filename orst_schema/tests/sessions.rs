use std::path::PathBuf;

use orst_schema::*;
use utilities::session::TestSession;

fn load(name: &str) -> VisualizationSession {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);

    let bytes = std::fs::read(&path).expect("Unable to read the session file");
    serde_json::from_slice(&bytes).expect("The file is not a session")
}

mod lifecycle {
    use super::*;

    #[test]
    fn every_stage_is_valid() {
        let tester = TestSession::new();

        assert!(tester.idle.validate().is_ok());
        assert!(tester.stepping.validate().is_ok());
        assert!(tester.racing.validate().is_ok());
        assert!(tester.finished.validate().is_ok());
    }

    #[test]
    fn stepping_shows_the_primary_run() {
        let tester = TestSession::new();
        let session = &tester.stepping;

        assert_eq!(session.view_mode, ViewMode::Single);
        assert_eq!(session.current, session.primary);
        assert_eq!(session.current.current_indices, vec![3, 4]);

        let json = serde_json::to_value(session).unwrap();
        assert_eq!(json["stats"]["startTime"], 250.125);
        assert_eq!(json["currentIndices"], serde_json::json!([3, 4]));
        assert_eq!(json["algorithm"], json["primary"]["algorithm"]);
    }

    #[test]
    fn racing_has_no_result() {
        let tester = TestSession::new();

        assert!(tester.racing.is_running);
        assert!(!tester.racing.all_sorted());
        assert!(tester.racing.primary.stats.is_running());
        assert!(tester.racing.comparison_result.is_none());
    }

    #[test]
    fn finished_race() {
        let tester = TestSession::new();
        let outcome = tester.finished.comparison_result.as_ref().unwrap();

        assert_eq!(outcome.winner, RunSlot::Secondary);
        assert_eq!(outcome.time_difference, 600.0);
        assert!((outcome.percentage_difference - 66.666).abs() < 0.01);
        assert_eq!(outcome.insights.len(), 3);
        assert_eq!(
            outcome.insights[0],
            "Merge Sort (secondary) finished 600 ms ahead of Bubble Sort (primary) (66.7% faster)."
        );
        assert_eq!(tester.finished.secondary.stats.is_winner, Some(true));
    }

    #[test]
    fn unsorting_breaks_the_result() {
        let mut session = TestSession::new().finished;
        session.secondary.is_sorted = false;

        assert!(matches!(
            session.validate(),
            Err(Error::InconsistentResult(_))
        ));
    }

    #[test]
    fn survives_json() {
        let tester = TestSession::new();
        let json = serde_json::to_string(&tester.finished).unwrap();
        let back: VisualizationSession = serde_json::from_str(&json).unwrap();

        assert_eq!(back, tester.finished);
        assert!(back.validate().is_ok());
    }
}

mod files {
    use super::*;

    #[test]
    fn browser_state() {
        let session = load("compare_finished.json");

        assert_eq!(session.view_mode, ViewMode::Compare);
        assert_eq!(session.theme, Theme::Light);
        assert_eq!(session.primary.algorithm, SortingAlgorithm::Insertion);
        assert_eq!(session.secondary.algorithm, SortingAlgorithm::Shell);
        assert_eq!(session.primary.show_info, Some(true));
        assert_eq!(session.secondary.show_info, None);
        assert_eq!(session.primary.values(), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(session.primary.array[3].is_padding());

        assert_eq!(session.current.algorithm, SortingAlgorithm::Insertion);
        assert!(session.current.array.is_empty());
        assert!(!session.current.is_sorted);
        assert_eq!(session.current.stats, RunStatistics::new());

        let outcome = session.comparison_result.as_ref().unwrap();
        assert_eq!(outcome.winner, RunSlot::Secondary);
        assert_eq!(outcome.insights.len(), 1);

        assert!(session.validate().is_ok());
    }

    #[test]
    fn reversed_timestamps() {
        let session = load("reversed_timestamps.json");

        assert_eq!(
            session.validate(),
            Err(Error::InconsistentTimestamps {
                start: Some(100.0),
                end: 50.0
            })
        );
    }

    #[test]
    fn fractional_timestamps() {
        let session = load("fractional_timestamps.json");

        assert_eq!(session.current, session.primary);
        assert_eq!(session.current.values(), vec![12.5, 3.25, 40.0]);
        assert_eq!(session.speed, 72.5);
        assert_eq!(
            session.primary.stats.start_time,
            Some(18_234.700_000_000_186)
        );
        assert!(session.primary.stats.is_running());

        let elapsed = session.secondary.stats.elapsed_ms().unwrap();
        assert!((elapsed - 156.8).abs() < 1e-6);
        assert_eq!(
            session.primary.stats.started_at().unwrap().timestamp_micros(),
            18_234_700
        );

        assert!(session.validate().is_ok());
    }

    #[test]
    fn unknown_algorithm() {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests/fixtures/unknown_algorithm.json");

        let bytes = std::fs::read(path).unwrap();
        let err = serde_json::from_slice::<VisualizationSession>(&bytes).unwrap_err();
        assert!(err.to_string().contains("`bogo`"));
    }
}
