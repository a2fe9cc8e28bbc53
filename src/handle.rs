use crate::{errors::TaskError, result::TaskResult};
use crossbeam::channel::Receiver;

/// Caller-owned handle to one submitted task.
///
/// Resolved exactly once by the worker that executes the task: with the
/// task's value, with its captured panic, or with [`TaskError::Lost`] if the
/// pool shut down before the task ever ran. The handle is independent of the
/// queue and the pool; it stays valid after the pool is dropped.
pub struct TaskHandle<T> {
    receiver: Receiver<TaskResult<T>>,
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(receiver: Receiver<TaskResult<T>>) -> Self {
        Self { receiver }
    }

    /// Blocks until the task has run, returning its value or failure.
    ///
    /// A disconnected channel means the envelope was destroyed without
    /// executing, which surfaces as [`TaskError::Lost`].
    pub fn wait(self) -> TaskResult<T> {
        self.receiver.recv().unwrap_or(Err(TaskError::Lost))
    }
}
