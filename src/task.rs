use crate::{errors::TaskError, handle::TaskHandle, result::TaskResult};
use crossbeam::channel;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Type-erased unit of work.
///
/// The typed closure and the sending end of its result channel are captured
/// inside an untyped `FnOnce`, so envelopes with different result types can
/// share one queue. The typed end is split off as a [`TaskHandle`] before
/// erasure.
pub(crate) struct Task {
    run: Box<dyn FnOnce() -> Result<(), TaskError> + Send + 'static>,
}

impl Task {
    /// Executes the captured closure. Consuming `self` makes a second run
    /// unrepresentable.
    ///
    /// The outcome goes to the task's handle; the returned status is a copy
    /// of the failure, if any, for the worker to log.
    pub(crate) fn run(self) -> Result<(), TaskError> {
        (self.run)()
    }
}

/// Captures `f` into an erased envelope and splits off the handle that will
/// observe its outcome.
///
/// Everything the closure needs is captured by value at this point; nothing
/// is late-bound at execution time.
pub(crate) fn package<F, R>(f: F) -> (Task, TaskHandle<R>)
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let (tx, rx) = channel::bounded(1);

    let run = Box::new(move || {
        let outcome: TaskResult<R> = panic::catch_unwind(AssertUnwindSafe(f))
            .map_err(|payload| TaskError::Panic(panic_message(payload)));
        let status = match &outcome {
            Ok(_) => Ok(()),
            Err(err) => Err(err.clone()),
        };
        // The caller may have dropped its handle; an unwanted result is
        // discarded, not an error.
        let _ = tx.send(outcome);
        status
    });

    (Task { run }, TaskHandle::new(rx))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<&'static str>() {
        Ok(msg) => (*msg).to_owned(),
        Err(payload) => match payload.downcast::<String>() {
            Ok(msg) => *msg,
            Err(_) => "non-string panic payload".to_owned(),
        },
    }
}
