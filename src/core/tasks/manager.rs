use std::{
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        mpsc,
        Arc,
    },
    time::Duration,
};

use eframe::egui;
use tokio::runtime::{
    Builder,
    Runtime,
};
use tracing::{
    debug,
    info,
};

use super::{
    TaskHandle,
    TaskResult,
};
use crate::{
    core::{
        FetchRequest,
        ScheduleSettle,
        SwipeError,
    },
    source::ImageSource,
};

#[derive(Clone)]
struct ResultSender {
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<egui::Context>,
}

impl ResultSender {
    fn send(&self, result: TaskResult) {
        let task_type = result.task_type();
        if self.sender.send(result).is_err() {
            debug!(task_type, "Result receiver dropped");
            return;
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

/// Runs the two asynchronous boundaries of a session off the UI thread and
/// queues their results for the next frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: ResultSender,
    fetch: Option<TaskHandle>,
    settle: Option<TaskHandle>,
}

impl TaskManager {
    pub fn new() -> Result<Self, SwipeError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("pawswipe-tasks")
            .enable_all()
            .build()?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self {
            runtime: Arc::new(runtime),
            receiver,
            sender: ResultSender { sender, repaint: None },
            fetch: None,
            settle: None,
        })
    }

    /// Wakes the UI whenever a result is queued, so idle frames pick it up.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.sender.repaint = Some(ctx);
        self
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (ResultSender, Arc<AtomicBool>) {
        (self.sender.clone(), Arc::new(AtomicBool::new(false)))
    }

    /// Starts the fetch for `request`, replacing any fetch still in flight.
    pub fn fetch_batch(
        &mut self,
        request: FetchRequest,
        source: Arc<dyn ImageSource>,
        timeout: Duration,
    ) {
        if let Some(previous) = self.fetch.take() {
            previous.cancel();
        }

        let (sender, cancel_token) = self.task_context();
        let token = cancel_token.clone();
        let FetchRequest { generation, count } = request;

        let join_handle = self.runtime.spawn(async move {
            info!(generation, count, source = source.name(), "Fetching batch");

            let result = match tokio::time::timeout(timeout, source.fetch_batch(count)).await {
                Ok(result) => result,
                Err(_) => Err(SwipeError::Timeout(timeout)),
            };

            if token.load(Ordering::Relaxed) {
                debug!(generation, "Fetch cancelled, discarding result");
                return;
            }
            sender.send(TaskResult::BatchLoaded { generation, result });
        });

        self.fetch = Some(TaskHandle::new(cancel_token, join_handle));
    }

    /// Posts [`TaskResult::SettleElapsed`] after the delay unless cancelled first.
    pub fn schedule_settle(&mut self, settle: ScheduleSettle) {
        if let Some(previous) = self.settle.take() {
            previous.cancel();
        }

        let (sender, cancel_token) = self.task_context();
        let token = cancel_token.clone();
        let ScheduleSettle { generation, delay } = settle;

        let join_handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if !token.load(Ordering::Relaxed) {
                sender.send(TaskResult::SettleElapsed { generation });
            }
        });

        self.settle = Some(TaskHandle::new(cancel_token, join_handle));
    }

    pub fn has_pending_settle(&self) -> bool {
        self.settle.as_ref().is_some_and(|h| !h.is_cancelled() && !h.is_finished())
    }

    /// Calls off the in-flight fetch and settle timer, used when a session restarts.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.cancel();
        }
        if let Some(handle) = self.settle.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        thread,
        time::Instant,
    };

    use futures::future::BoxFuture;

    use super::*;
    use crate::core::Card;

    struct StubSource {
        delay: Duration,
    }

    impl ImageSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn fetch_batch(&self, count: usize) -> BoxFuture<'_, Result<Vec<Card>, SwipeError>> {
            Box::pin(async move {
                tokio::time::sleep(self.delay).await;
                Ok((0..count).map(|i| Card::new(format!("c{i}"), format!("u/{i}"))).collect())
            })
        }
    }

    fn stub(delay_ms: u64) -> Arc<dyn ImageSource> {
        Arc::new(StubSource { delay: Duration::from_millis(delay_ms) })
    }

    fn wait_for_results(manager: &mut TaskManager, wait: Duration) -> Vec<TaskResult> {
        let deadline = Instant::now() + wait;
        let mut results = Vec::new();
        while Instant::now() < deadline {
            results.extend(manager.poll_results());
            if !results.is_empty() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        results
    }

    #[test]
    fn fetch_posts_batch_with_generation() {
        let mut manager = TaskManager::new().unwrap();
        manager.fetch_batch(
            FetchRequest { generation: 4, count: 3 },
            stub(0),
            Duration::from_secs(5),
        );

        let results = wait_for_results(&mut manager, Duration::from_secs(5));
        match results.as_slice() {
            [TaskResult::BatchLoaded { generation, result: Ok(cards) }] => {
                assert_eq!(*generation, 4);
                assert_eq!(cards.len(), 3);
            }
            other => panic!("Expected one batch, got {:?}", other),
        }
    }

    #[test]
    fn slow_fetch_times_out() {
        let mut manager = TaskManager::new().unwrap();
        manager.fetch_batch(
            FetchRequest { generation: 1, count: 1 },
            stub(10_000),
            Duration::from_millis(50),
        );

        let results = wait_for_results(&mut manager, Duration::from_secs(5));
        assert!(matches!(
            results.as_slice(),
            [TaskResult::BatchLoaded { result: Err(SwipeError::Timeout(_)), .. }]
        ));
    }

    #[test]
    fn newer_fetch_replaces_older() {
        let mut manager = TaskManager::new().unwrap();
        manager.fetch_batch(
            FetchRequest { generation: 1, count: 1 },
            stub(200),
            Duration::from_secs(5),
        );
        manager.fetch_batch(
            FetchRequest { generation: 2, count: 1 },
            stub(0),
            Duration::from_secs(5),
        );

        thread::sleep(Duration::from_millis(400));
        let generations: Vec<u64> = manager.poll_results().iter().map(|r| r.generation()).collect();
        assert_eq!(generations, vec![2]);
    }

    #[test]
    fn settle_fires_after_delay() {
        let mut manager = TaskManager::new().unwrap();
        manager.schedule_settle(ScheduleSettle { generation: 7, delay: Duration::from_millis(20) });
        assert!(manager.has_pending_settle());

        let results = wait_for_results(&mut manager, Duration::from_secs(5));
        assert!(matches!(results.as_slice(), [TaskResult::SettleElapsed { generation: 7 }]));
    }

    #[test]
    fn cancelled_settle_never_fires() {
        let mut manager = TaskManager::new().unwrap();
        manager.schedule_settle(ScheduleSettle { generation: 1, delay: Duration::from_millis(30) });
        manager.cancel_pending();
        assert!(!manager.has_pending_settle());

        thread::sleep(Duration::from_millis(150));
        assert!(manager.poll_results().is_empty());
    }
}
