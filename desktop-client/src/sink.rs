use common::BoardSnapshot;
use common::session::SnapshotSink;

use crate::state::SharedState;

/// Bridges engine snapshots into the shared screen state the egui
/// thread polls each frame.
#[derive(Clone)]
pub struct LocalSnapshotSink {
    shared_state: SharedState,
}

impl LocalSnapshotSink {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SnapshotSink for LocalSnapshotSink {
    fn publish(&self, snapshot: BoardSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }
}
