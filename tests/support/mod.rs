use std::time::{Duration, Instant};

use workdash::services::dashboard::DashboardSession;
use workdash::services::table::TableViewState;
use workdash::LocalStore;

/// Store over the embedded sample fixture.
pub fn sample_store() -> LocalStore {
    let _ = env_logger::builder().is_test(true).try_init();
    LocalStore::with_sample_data().expect("embedded sample fixture must parse")
}

pub fn sample_session() -> DashboardSession {
    DashboardSession::new(sample_store())
}

/// Type a search and advance the virtual clock past the debounce window so
/// the commit lands immediately.
pub fn commit_search(state: &mut TableViewState, text: &str) {
    let now = Instant::now();
    state.type_search(text, now);
    assert!(
        state.tick(now + Duration::from_millis(300)),
        "search should commit after the quiet window"
    );
}
