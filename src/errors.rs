use std::io;
use thiserror::Error;

/// Errors from pool construction and task submission.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("thread pool needs at least one worker thread")]
    NoThreads,
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
    #[error("task queue is closed")]
    QueueClosed,
}

/// Failure of a single task, reported through its handle.
///
/// A submission error leaves the caller with no handle at all; a `TaskError`
/// is what an already-issued handle resolves to when the task itself went
/// wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task panicked: {0}")]
    Panic(String),
    #[error("task was dropped before it ran")]
    Lost,
}
