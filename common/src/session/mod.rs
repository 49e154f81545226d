mod scheduler;
mod snake_session;

pub use scheduler::TickScheduler;
pub use snake_session::{SessionCommand, SnakeSession, SnapshotSink};
