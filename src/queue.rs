use crate::errors::PoolError;
use crate::task::Task;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};

/// FIFO of erased task envelopes, shared by submitters and workers.
///
/// One mutex guards the deque, one condvar wakes idle workers. `done` is an
/// atomic so the fast-path reads outside the lock stay lock-free; the
/// authoritative read inside the wait loop happens with the lock held.
///
/// Task closures never run under this mutex (workers pop first, execute
/// after releasing the lock), so the guards cannot be poisoned by user code;
/// a poisoned lock is treated as still usable.
pub(crate) struct TaskQueue {
    tasks: Mutex<VecDeque<Task>>,
    ready: Condvar,
    done: AtomicBool,
}

impl TaskQueue {
    pub(crate) fn new() -> Self {
        Self {
            tasks: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
            done: AtomicBool::new(false),
        }
    }

    /// Appends at the tail and wakes one idle worker.
    pub(crate) fn push(&self, task: Task) -> Result<(), PoolError> {
        if self.done.load(Ordering::Acquire) {
            return Err(PoolError::QueueClosed);
        }
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.push_back(task);
        // One waiter per task; the broadcast is reserved for shutdown.
        self.ready.notify_one();
        Ok(())
    }

    /// Blocks the calling worker until a task is available or the queue is
    /// closed.
    ///
    /// Returns `None` once `close` has been called, even if envelopes are
    /// still queued: those are dropped with the queue and their handles
    /// resolve to `TaskError::Lost`.
    pub(crate) fn pop_blocking(&self) -> Option<Task> {
        if self.done.load(Ordering::Acquire) {
            return None;
        }
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if self.done.load(Ordering::Acquire) {
                return None;
            }
            if let Some(task) = tasks.pop_front() {
                return Some(task);
            }
            // Condvar waits can wake spuriously; the predicate is re-checked
            // every iteration.
            tasks = self
                .ready
                .wait(tasks)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Closes the queue and releases every blocked worker.
    pub(crate) fn close(&self) {
        // The store happens under the lock so a worker between its predicate
        // check and its wait cannot miss the broadcast.
        let _tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        self.done.store(true, Ordering::Release);
        self.ready.notify_all();
    }

    /// Queue depth snapshot for metrics.
    pub(crate) fn len(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
