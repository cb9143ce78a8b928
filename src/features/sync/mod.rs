//! Offline sales queue and sync.
//!
//! Sales that could not be posted are stored in a [`QueueStore`]. A sweep by
//! the [`SyncEngine`] re-posts every pending record once and marks the ones
//! the backend accepts as synced. There is no backoff and no retry limit: a
//! record stays pending until a sweep delivers it.

pub mod engine;
pub mod queue;
pub mod record;

pub use engine::{SyncEngine, SyncReport};
pub use queue::{QueueStats, QueueStore};
pub use record::{QueueRecord, QueueStatus};
