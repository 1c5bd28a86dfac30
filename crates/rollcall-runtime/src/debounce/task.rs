use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Debounced text backed by a tokio task.
///
/// At most one sleep task is outstanding; `set` aborts it before spawning
/// the next. Committed values are published on a `watch` channel. Dropping
/// the instance aborts the pending task, so nothing is committed after
/// teardown.
///
/// `set` and `set_delay` must be called from within a tokio runtime.
pub struct DebouncedText {
    raw: String,
    delay: Duration,
    tx: Arc<watch::Sender<String>>,
    task: Option<JoinHandle<()>>,
}

impl DebouncedText {
    pub fn new(initial: impl Into<String>, delay: Duration) -> Self {
        let initial = initial.into();
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            raw: initial,
            delay,
            tx: Arc::new(tx),
            task: None,
        }
    }

    /// Receiver observing committed values.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// The latest input, committed or not.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The committed value.
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.raw = value.into();
        self.arm();
    }

    /// Change the delay; a pending value is re-armed from now with the new delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
        if self.is_pending() {
            self.arm();
        }
    }

    /// Abort the pending commit, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn arm(&mut self) {
        self.cancel();

        let value = self.raw.clone();
        if self.delay.is_zero() {
            publish(&self.tx, value);
            return;
        }

        // Deadline is fixed here, not when the task is first polled.
        let deadline = Instant::now() + self.delay;
        let tx = Arc::clone(&self.tx);
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            publish(&tx, value);
        }));
    }
}

impl Drop for DebouncedText {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn publish(tx: &watch::Sender<String>, value: String) {
    let changed = tx.send_if_modified(|current| {
        if *current == value {
            return false;
        }
        *current = value;
        true
    });
    if changed {
        tracing::trace!("debounced text committed");
    }
}
