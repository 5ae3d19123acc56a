//! In-memory snapshot of the joined appointment list.
//!
//! The list is replaced wholesale, never patched. Each fetch takes a ticket
//! from a monotonically increasing counter and its result is only published
//! when the ticket is newer than what is currently published. Invalidation
//! takes a ticket as well, so a fetch that started before a write cannot
//! publish the pre-write rows afterwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use super::models::AppointmentDetails;

/// Ticket handed out when a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
struct Published {
    generation: u64,
    records: Option<Arc<Vec<AppointmentDetails>>>,
}

#[derive(Debug, Default)]
pub struct AppointmentSnapshot {
    counter: AtomicU64,
    published: Mutex<Published>,
}

impl AppointmentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Published> {
        // Published is only ever replaced whole
        self.published.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_generation(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The last published list, if it has not been invalidated since
    pub fn current(&self) -> Option<Arc<Vec<AppointmentDetails>>> {
        self.lock().records.clone()
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.next_generation())
    }

    /// Publish a fetch result. Returns `false` when a newer fetch or an
    /// invalidation got there first; the result is then dropped.
    pub fn publish(&self, ticket: FetchTicket, records: impl Into<Arc<Vec<AppointmentDetails>>>) -> bool {
        let mut published = self.lock();
        if ticket.0 <= published.generation {
            debug!(
                "Discarding superseded appointment fetch {} (published {})",
                ticket.0, published.generation
            );
            return false;
        }

        published.generation = ticket.0;
        published.records = Some(records.into());
        true
    }

    /// Drop the published list after a write
    pub fn invalidate(&self) {
        let generation = self.next_generation();
        let mut published = self.lock();
        if generation > published.generation {
            published.generation = generation;
        }
        published.records = None;
    }
}
