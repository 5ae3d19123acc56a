//! Wall clock reading refreshed once per second.
//!
//! The ticker owns its background task: dropping the ticker aborts the task,
//! which drops the sender and ends every subscription.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct ClockTicker {
    receiver: watch::Receiver<DateTime<Local>>,
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// Start ticking every second. Must be called inside a tokio runtime.
    pub fn start() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        let (sender, receiver) = watch::channel(Local::now());

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                if sender.send(Local::now()).is_err() {
                    break;
                }
            }
        });

        debug!("Clock ticker started with period {:?}", period);
        Self { receiver, handle }
    }

    /// Latest published reading
    pub fn now(&self) -> DateTime<Local> {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<DateTime<Local>> {
        self.receiver.clone()
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
