use okr_core::{suggest::ScriptedSelector, ObjectiveSession, RecordingSaver, SessionBuilder};

/// Helper function to create a session whose suggestions follow `picks`
pub fn create_test_session(picks: &[usize]) -> (ObjectiveSession, RecordingSaver) {
    let saver = RecordingSaver::new();
    let session = SessionBuilder::new()
        .with_selector(ScriptedSelector::new(picks.iter().copied()))
        .with_saver(saver.clone())
        .build();
    (session, saver)
}
