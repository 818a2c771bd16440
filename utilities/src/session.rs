use orst_schema::*;

/// Ready made sessions in the states a driver passes through.
pub struct TestSession {
    /// Fresh single view session, nothing has run yet.
    pub idle: VisualizationSession,
    /// Single view, mid run, with `current` mirroring the primary run.
    pub stepping: VisualizationSession,
    /// Compare view, both runs still going.
    pub racing: VisualizationSession,
    /// Compare view, both runs sorted and the result published.
    pub finished: VisualizationSession,
}

impl TestSession {
    pub fn new() -> Self {
        let idle = VisualizationSession::new(SessionConfig {
            array_size: 10,
            ..SessionConfig::default()
        });

        let mut stepping = idle.clone();
        stepping.is_running = true;
        stepping.primary.stats.start(250.125);
        stepping.primary.stats.record_comparison();
        stepping.primary.current_indices = vec![3, 4];
        stepping.sync_current();

        let mut racing = VisualizationSession::new(SessionConfig {
            view_mode: ViewMode::Compare,
            primary: SortingAlgorithm::Bubble,
            secondary: SortingAlgorithm::Merge,
            array_size: 10,
            ..SessionConfig::default()
        });
        racing.is_running = true;
        for slot in [RunSlot::Primary, RunSlot::Secondary] {
            let run = racing.sub_session_mut(slot);
            run.stats.start(1_000.0);
            run.stats.record_comparison();
            run.current_indices = vec![0, 1];
            run.array[0].is_comparing = true;
            run.array[1].is_comparing = true;
        }

        let mut finished = racing.clone();
        finished.is_running = false;
        finish(finished.sub_session_mut(RunSlot::Primary), 1_900.0, 45, 20);
        finish(finished.sub_session_mut(RunSlot::Secondary), 1_300.0, 25, 0);
        finished
            .publish_results()
            .expect("both runs are sorted and finished");

        TestSession {
            idle,
            stepping,
            racing,
            finished,
        }
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(run: &mut SubSession, at: f64, comparisons: u64, swaps: u64) {
    run.stats.comparisons = comparisons;
    run.stats.swaps = swaps;
    run.stats.finish(at).expect("run was started before");
    run.mark_sorted();
}
