//! Concurrent fire-and-forget delivery fan-out
//!
//! Each tick the dispatcher launches one delivery task per unit of
//! configured concurrency, all reading the same immutable event snapshot.
//! Launches are gated by a semaphore sized to the in-flight cap: when no
//! permit is available the delivery is dropped and reported, never queued,
//! so the scheduler is never back-pressured. `dispatch` returns as soon as
//! the tasks are spawned; outcomes are classified and reported by the tasks
//! themselves.

use crate::seeder::event::Event;
use crate::seeder::reporter::DeliveryReporter;
use crate::seeder::types::{Concurrency, SeederConfig, TargetUrl};
use crate::transport::EventTransport;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Launches per-tick delivery tasks and classifies their outcomes
pub struct Dispatcher {
    transport: Arc<dyn EventTransport>,
    reporter: Arc<dyn DeliveryReporter>,
    limiter: Arc<Semaphore>,
    target: TargetUrl,
    concurrency: Concurrency,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn EventTransport>,
        reporter: Arc<dyn DeliveryReporter>,
        config: &SeederConfig,
    ) -> Self {
        Self {
            transport,
            reporter,
            limiter: Arc::new(Semaphore::new(config.max_in_flight.into_inner())),
            target: config.target.clone(),
            concurrency: config.concurrency,
        }
    }

    /// Launch up to `concurrency` delivery tasks for one event snapshot.
    ///
    /// Returns once the tasks are spawned. Tasks that cannot obtain an
    /// in-flight permit are reported as dropped.
    pub fn dispatch(&self, event: Arc<Event>) {
        for _ in 0..self.concurrency.into_inner() {
            match Arc::clone(&self.limiter).try_acquire_owned() {
                Ok(permit) => {
                    let transport = Arc::clone(&self.transport);
                    let reporter = Arc::clone(&self.reporter);
                    let target = self.target.clone();
                    let event = Arc::clone(&event);

                    tokio::spawn(async move {
                        match transport.request(&event).await {
                            Ok(ack) => reporter.delivered(event.id, &target, ack.reply.as_ref()),
                            Err(error) => reporter.failed(event.id, &target, &error),
                        }
                        drop(permit);
                    });
                }
                Err(_) => self.reporter.dropped(event.id, &self.target),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{config, wait_until, MockBehavior, MockTransport};
    use super::*;
    use crate::seeder::event::EventBuilder;
    use crate::seeder::extensions::ExtensionMap;
    use crate::seeder::payload::Payload;
    use crate::seeder::reporter::test_support::RecordingReporter;
    use crate::seeder::types::{EventIdentity, PayloadSize};
    use std::time::Duration;

    fn event() -> Arc<Event> {
        Arc::new(
            EventBuilder::new(
                EventIdentity::default(),
                ExtensionMap::parse(""),
                Payload::generate(PayloadSize::from(0)),
            )
            .build(),
        )
    }

    #[tokio::test]
    async fn test_launches_exactly_concurrency_tasks_on_one_snapshot() {
        let (transport, mut seen) = MockTransport::new(MockBehavior::Ack(None));
        let reporter = Arc::new(RecordingReporter::default());
        let dispatcher = Dispatcher::new(transport, Arc::clone(&reporter) as Arc<dyn crate::seeder::reporter::DeliveryReporter>, &config(3, 16, 100));

        let event = event();
        dispatcher.dispatch(Arc::clone(&event));

        for _ in 0..3 {
            let id = tokio::time::timeout(Duration::from_secs(1), seen.recv())
                .await
                .expect("task should run")
                .expect("sender alive");
            assert_eq!(id, event.id);
        }

        // No fourth task
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(seen.try_recv().is_err());
        assert!(wait_until(|| reporter.delivered_count() == 3).await);
    }

    #[tokio::test]
    async fn test_capacity_exhaustion_drops_the_excess() {
        let (transport, mut seen) = MockTransport::new(MockBehavior::Hang);
        let reporter = Arc::new(RecordingReporter::default());
        let dispatcher = Dispatcher::new(transport, Arc::clone(&reporter) as Arc<dyn crate::seeder::reporter::DeliveryReporter>, &config(4, 2, 100));

        dispatcher.dispatch(event());

        // Two launches hold the only permits; the other two are dropped
        assert!(wait_until(|| reporter.dropped_count() == 2).await);
        for _ in 0..2 {
            tokio::time::timeout(Duration::from_secs(1), seen.recv())
                .await
                .expect("launched task should run")
                .expect("sender alive");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(seen.try_recv().is_err());
        assert_eq!(reporter.delivered_count(), 0);
    }

    #[tokio::test]
    async fn test_failures_are_reported_and_contained() {
        let (transport, _seen) = MockTransport::new(MockBehavior::Nack);
        let reporter = Arc::new(RecordingReporter::default());
        let dispatcher = Dispatcher::new(transport, Arc::clone(&reporter) as Arc<dyn crate::seeder::reporter::DeliveryReporter>, &config(2, 16, 100));

        dispatcher.dispatch(event());

        assert!(wait_until(|| reporter.outcomes().len() == 2).await);
        assert_eq!(reporter.delivered_count(), 0);
        assert_eq!(reporter.dropped_count(), 0);
    }

    #[tokio::test]
    async fn test_permits_are_released_when_tasks_complete() {
        let (transport, _seen) = MockTransport::new(MockBehavior::Ack(None));
        let reporter = Arc::new(RecordingReporter::default());
        let dispatcher = Dispatcher::new(transport, Arc::clone(&reporter) as Arc<dyn crate::seeder::reporter::DeliveryReporter>, &config(1, 1, 100));

        dispatcher.dispatch(event());
        assert!(wait_until(|| reporter.delivered_count() == 1).await);

        // Capacity of one is free again for the next tick
        dispatcher.dispatch(event());
        assert!(wait_until(|| reporter.delivered_count() == 2).await);
        assert_eq!(reporter.dropped_count(), 0);
    }
}
