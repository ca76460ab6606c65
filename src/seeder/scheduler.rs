//! Tick loop driving event construction and dispatch
//!
//! One iteration per tick: build an event, fan it out, sleep for the
//! configured interval. The sleep starts when dispatch returns (which is as
//! soon as tasks are launched), so tick cadence is independent of how long
//! in-flight deliveries take. Shutdown is cooperative and observed only at
//! the sleep boundary, leaving per-tick semantics untouched.

use crate::seeder::dispatcher::Dispatcher;
use crate::seeder::event::EventBuilder;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Drives the build → dispatch → sleep cycle until shutdown
pub struct Scheduler {
    builder: EventBuilder,
    dispatcher: Dispatcher,
    interval: Duration,
    shutdown_rx: mpsc::Receiver<()>,
}

impl Scheduler {
    /// Create a scheduler and the sender used to request shutdown.
    pub fn new(
        builder: EventBuilder,
        dispatcher: Dispatcher,
        interval: Duration,
    ) -> (Self, mpsc::Sender<()>) {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let scheduler = Self {
            builder,
            dispatcher,
            interval,
            shutdown_rx,
        };

        (scheduler, shutdown_tx)
    }

    /// Run ticks until a shutdown signal arrives.
    pub async fn run(mut self) {
        info!("Seeder started (interval {:?})", self.interval);

        loop {
            let event = Arc::new(self.builder.build());
            debug!("Built event (id={})", event.id);
            self.dispatcher.dispatch(event);

            info!("Sleeping...");
            tokio::select! {
                () = tokio::time::sleep(self.interval) => {}
                _ = self.shutdown_rx.recv() => {
                    info!("Seeder shutting down");
                    break;
                }
            }
        }

        info!("Seeder stopped");
    }
}
