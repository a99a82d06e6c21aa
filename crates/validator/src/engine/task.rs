//! Deferred assertions and their sequential executor

use futures::future::BoxFuture;

/// One deferred assertion.
///
/// Nothing happens until the task is invoked; invoking it consumes it and
/// yields the future that performs the check.
pub(crate) type AssertionTask<'a, E> = Box<dyn FnOnce() -> BoxFuture<'a, Result<(), E>> + Send + 'a>;

/// An append-only, ordered list of deferred assertions.
pub(crate) struct TaskQueue<'a, E> {
    tasks: Vec<AssertionTask<'a, E>>,
}

impl<'a, E> TaskQueue<'a, E> {
    pub(crate) fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub(crate) fn push<F>(&mut self, task: F)
    where
        F: FnOnce() -> BoxFuture<'a, Result<(), E>> + Send + 'a,
    {
        self.tasks.push(Box::new(task));
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Invokes the tasks in declaration order, one at a time.
    ///
    /// Each task's future is driven to completion before the next task is
    /// invoked. The first failure is returned and the remaining tasks are
    /// dropped without ever being invoked.
    pub(crate) async fn drain(self) -> Result<(), E> {
        let total = self.tasks.len();
        for (index, task) in self.tasks.into_iter().enumerate() {
            tracing::trace!(task = index, total, "invoking validation task");
            if let Err(error) = task().await {
                tracing::debug!(
                    task = index,
                    skipped = total - index - 1,
                    "validation task failed"
                );
                return Err(error);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::sync::{Arc, Mutex};

    fn recording(log: &Arc<Mutex<Vec<usize>>>, id: usize, pass: bool) -> impl FnOnce() -> BoxFuture<'static, Result<(), String>> + Send + 'static {
        let log = Arc::clone(log);
        move || {
            async move {
                log.lock().unwrap().push(id);
                if pass { Ok(()) } else { Err(format!("task {id}")) }
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn test_empty_queue_succeeds() {
        let queue: TaskQueue<'_, String> = TaskQueue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.drain().await.is_ok());
    }

    #[tokio::test]
    async fn test_runs_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut queue = TaskQueue::new();
        for id in 0..4 {
            queue.push(recording(&log, id, true));
        }
        assert!(queue.drain().await.is_ok());
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut queue = TaskQueue::new();
        queue.push(recording(&log, 0, true));
        queue.push(recording(&log, 1, false));
        queue.push(recording(&log, 2, false));
        assert_eq!(queue.drain().await, Err("task 1".to_string()));
        assert_eq!(*log.lock().unwrap(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_pushing_does_not_invoke() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut queue: TaskQueue<'_, String> = TaskQueue::new();
        queue.push(recording(&log, 0, true));
        assert!(log.lock().unwrap().is_empty());
        drop(queue);
        assert!(log.lock().unwrap().is_empty());
    }
}
