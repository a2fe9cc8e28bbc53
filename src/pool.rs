use crate::{
    errors::PoolError,
    handle::TaskHandle,
    model::PoolMetrics,
    queue::TaskQueue,
    task,
};
use std::fmt;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::thread;
use tracing::{debug, error};

/// Worker pool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub num_threads: usize,
    pub thread_name_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            thread_name_prefix: "pool-worker".to_owned(),
        }
    }
}

/// State shared between the controller and its workers.
struct PoolShared {
    queue: TaskQueue,
    submitted: AtomicUsize,
    completed: AtomicUsize,
    failed: AtomicUsize,
}

/// Fixed-size worker thread pool.
///
/// Workers are spawned once at construction and joined when the pool is
/// dropped; drop is the only shutdown trigger. Submission never blocks, and
/// tasks are dequeued in strict submission order.
pub struct ThreadPool {
    shared: Arc<PoolShared>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl ThreadPool {
    /// Spawns a pool with `num_threads` workers.
    pub fn new(num_threads: usize) -> Result<Self, PoolError> {
        Self::with_config(Config {
            num_threads,
            ..Default::default()
        })
    }

    pub fn with_config(config: Config) -> Result<Self, PoolError> {
        if config.num_threads == 0 {
            return Err(PoolError::NoThreads);
        }

        let shared = Arc::new(PoolShared {
            queue: TaskQueue::new(),
            submitted: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        });

        let mut workers = Vec::with_capacity(config.num_threads);
        for id in 0..config.num_threads {
            let shared_clone = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("{}-{}", config.thread_name_prefix, id))
                .spawn(move || worker_loop(&shared_clone));
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(err) => {
                    // No partially-started pool: wake and join whatever
                    // already came up, then report the failure.
                    shared.queue.close();
                    for worker in workers.drain(..) {
                        let _ = worker.join();
                    }
                    return Err(PoolError::Spawn(err));
                }
            }
        }

        Ok(ThreadPool { shared, workers })
    }

    /// Queues `f` for execution and returns the handle observing its
    /// outcome.
    ///
    /// The closure's captures are the task's arguments, snapshotted at
    /// submission time. Returns as soon as the envelope is enqueued; it
    /// never waits for execution.
    pub fn submit<F, R>(&self, f: F) -> Result<TaskHandle<R>, PoolError>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (task, handle) = task::package(f);
        self.shared.queue.push(task)?;
        self.shared.submitted.fetch_add(1, Ordering::Relaxed);
        Ok(handle)
    }

    pub fn metrics(&self) -> PoolMetrics {
        PoolMetrics {
            submitted: self.shared.submitted.load(Ordering::Relaxed),
            completed: self.shared.completed.load(Ordering::Relaxed),
            failed: self.shared.failed.load(Ordering::Relaxed),
            queued: self.shared.queue.len(),
        }
    }
}

impl fmt::Debug for ThreadPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadPool")
            .field("workers", &self.workers.len())
            .finish_non_exhaustive()
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shared.queue.close();
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                // run() catches task panics, so a dead worker means a bug in
                // the pool itself, not in a task.
                error!("worker thread panicked");
            }
        }
    }
}

fn worker_loop(shared: &PoolShared) {
    while let Some(task) = shared.queue.pop_blocking() {
        match task.run() {
            Ok(()) => {
                shared.completed.fetch_add(1, Ordering::Relaxed);
            }
            Err(err) => {
                shared.failed.fetch_add(1, Ordering::Relaxed);
                error!(error = %err, "task failed");
            }
        }
    }
    debug!("worker stopped");
}
