//! A fixed-size pool of long-lived worker threads.
//!
//! Workers drain one FIFO queue of boxed closures. The pool hands back no
//! result for a task: callers that need one write it into storage they own.
//!
//! The queue, the per-worker idle flags and the stop flag share one mutex and
//! one condition variable. A worker releases the mutex while it runs a task.

use crate::error::PoolError;
use log::{debug, error, trace};
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

/// A unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Lifecycle of a [`WorkerPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// Workers spawned, nothing submitted yet
    Created,
    /// At least one task has been submitted
    Running,
    /// Stop flag raised, waiting for workers to exit
    ShuttingDown,
    /// Every worker has been joined
    Terminated,
}

struct Queue {
    tasks: VecDeque<Task>,
    idle: Vec<bool>,
    state: PoolState,
}

impl Queue {
    fn busy(&self) -> usize {
        self.idle.iter().filter(|idle| !**idle).count()
    }

    fn accepting(&self) -> bool {
        matches!(self.state, PoolState::Created | PoolState::Running)
    }
}

struct Shared {
    queue: Mutex<Queue>,
    available: Condvar,
}

impl Shared {
    // Tasks run outside the lock and panics are caught, so a poisoned mutex
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `threads` idle workers.
    pub fn new(threads: usize) -> Result<Self, PoolError> {
        if threads == 0 {
            return Err(PoolError::NoWorkers);
        }

        let shared = Arc::new(Shared {
            queue: Mutex::new(Queue {
                tasks: VecDeque::new(),
                idle: vec![true; threads],
                state: PoolState::Created,
            }),
            available: Condvar::new(),
        });

        let mut pool = Self {
            shared,
            workers: Vec::with_capacity(threads),
        };
        for id in 0..threads {
            let shared = Arc::clone(&pool.shared);
            // On failure the partially built pool is dropped, which joins
            // the workers spawned so far.
            let handle = thread::Builder::new()
                .name(format!("opener-worker-{id}"))
                .spawn(move || worker_loop(id, &shared))?;
            pool.workers.push(handle);
        }
        debug!("worker pool started with {threads} threads");
        Ok(pool)
    }

    /// Queue a task and wake one idle worker.
    pub fn submit<F>(&self, task: F) -> Result<(), PoolError>
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut queue = self.shared.lock();
            if !queue.accepting() {
                return Err(PoolError::ShutDown);
            }
            queue.state = PoolState::Running;
            queue.tasks.push_back(Box::new(task));
        }
        self.shared.available.notify_one();
        Ok(())
    }

    /// Number of workers currently running a task.
    pub fn busy_count(&self) -> usize {
        self.shared.lock().busy()
    }

    pub fn queue_len(&self) -> usize {
        self.shared.lock().tasks.len()
    }

    /// Tasks submitted but not yet finished: running plus queued.
    pub fn pending_load(&self) -> usize {
        let queue = self.shared.lock();
        queue.busy() + queue.tasks.len()
    }

    pub fn size(&self) -> usize {
        self.shared.lock().idle.len()
    }

    pub fn state(&self) -> PoolState {
        self.shared.lock().state
    }

    /// Stop the workers and join them.
    ///
    /// Tasks already running finish; tasks still queued are dropped without
    /// being run. Calling this more than once is harmless.
    pub fn shutdown(&mut self) {
        {
            let mut queue = self.shared.lock();
            if queue.state == PoolState::Terminated {
                return;
            }
            queue.state = PoolState::ShuttingDown;
        }
        self.shared.available.notify_all();

        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                error!("a worker thread panicked outside of a task");
            }
        }

        let mut queue = self.shared.lock();
        let discarded = queue.tasks.len();
        queue.tasks.clear();
        queue.state = PoolState::Terminated;
        debug!("worker pool terminated, {discarded} queued tasks discarded");
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(id: usize, shared: &Shared) {
    let mut queue = shared.lock();
    loop {
        if !queue.accepting() {
            trace!("worker {id} exiting");
            return;
        }
        let next = queue.tasks.pop_front();
        match next {
            Some(task) => {
                queue.idle[id] = false;
                drop(queue);

                if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                    error!("task panicked on worker {id}");
                }

                queue = shared.lock();
                queue.idle[id] = true;
            }
            None => {
                queue = shared
                    .available
                    .wait(queue)
                    .unwrap_or_else(PoisonError::into_inner);
            }
        }
    }
}
