use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Identifies one arming of a [`Debouncer`].
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct DebounceTicket(u64);

/// A single cancellable scheduled task. Arming replaces whatever was
/// scheduled before, so at most one task is pending at any time.
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Schedules the task produced by `task` to run after the delay. The task
    /// receives the ticket of this arming and should claim it with
    /// [`Debouncer::complete`] before acting, since a re-arm can land
    /// between the timer firing and the task running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F, Fut>(&mut self, task: F) -> DebounceTicket
    where
        F: FnOnce(DebounceTicket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        self.generation += 1;
        let ticket = DebounceTicket(self.generation);
        let token = CancellationToken::new();
        let delay = self.delay;

        tokio::spawn({
            let token = token.clone();

            async move {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        trace!(?ticket, "Debounced task superseded");
                    }
                    _ = tokio::time::sleep(delay) => {
                        task(ticket).await;
                    }
                }
            }
        });

        self.pending = Some(token);

        ticket
    }

    /// Cancels the pending task, if any. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(token) => {
                token.cancel();
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.pending.is_some() && self.generation == ticket.0
    }

    /// Marks the task of `ticket` as fired. Returns false for stale tickets.
    pub fn complete(&mut self, ticket: DebounceTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(
        counter: &Arc<AtomicUsize>,
    ) -> impl FnOnce(DebounceTicket) -> std::future::Ready<()> + Send + 'static {
        let counter = Arc::clone(counter);
        move |_: DebounceTicket| {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_runs_after_delay() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.arm(counting_task(&counter));

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(0, counter.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(1, counter.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_supersedes_pending_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let first = debouncer.arm(counting_task(&counter));
        tokio::time::sleep(Duration::from_millis(300)).await;
        let second = debouncer.arm(counting_task(&counter));

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(1, counter.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let ticket = debouncer.arm(counting_task(&counter));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert!(!debouncer.complete(ticket));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert!(!debouncer.is_armed());
    }
}
