use crate::errors::TaskError;

/// Outcome of a single task as observed through its handle.
pub type TaskResult<T> = Result<T, TaskError>;
