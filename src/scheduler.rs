use std::{sync::Arc, thread};

use once_cell::sync::Lazy;

mod thread_pool;
pub use thread_pool::ThreadPoolScheduler;

/// A unit of work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// An execution context: accepts a unit of work and executes it eventually,
/// possibly concurrently with the caller.
///
/// This is the whole contract. There is no return value and no ordering
/// guarantee across workers; whether work from one caller is serialized is
/// a property of the concrete scheduler, not of this trait. A panic inside
/// a task propagates into the scheduler's worker and is not the engine's
/// concern.
pub trait Scheduler {
  fn schedule(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
  #[inline]
  fn schedule(&self, task: Task) { (**self).schedule(task) }
}

/// Shape of the worker pool backing a [`ThreadPoolScheduler`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolShape {
  /// Grows on demand and reuses idle workers.
  Unbounded,
  /// At most this many workers (clamped to at least one).
  Fixed(usize),
  /// One worker draining tasks in FIFO order. The only shape that
  /// preserves the relative order of scheduled work.
  Single,
}

static IO: Lazy<ThreadPoolScheduler> =
  Lazy::new(|| ThreadPoolScheduler::with_name("rivulet-io", PoolShape::Unbounded));

static COMPUTATION: Lazy<ThreadPoolScheduler> = Lazy::new(|| {
  let workers = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
  ThreadPoolScheduler::with_name("rivulet-computation", PoolShape::Fixed(workers))
});

static SINGLE: Lazy<ThreadPoolScheduler> =
  Lazy::new(|| ThreadPoolScheduler::with_name("rivulet-single", PoolShape::Single));

/// Process-wide scheduler for I/O-bound work: an unbounded pool that parks
/// idle workers for reuse.
pub fn io() -> ThreadPoolScheduler { IO.clone() }

/// Process-wide scheduler for CPU-bound work: a pool bounded at the
/// machine's available parallelism.
pub fn computation() -> ThreadPoolScheduler { COMPUTATION.clone() }

/// Process-wide single-worker scheduler. Work scheduled here is serialized
/// and delivered in FIFO order.
pub fn single() -> ThreadPoolScheduler { SINGLE.clone() }

#[cfg(feature = "futures-scheduler")]
impl Scheduler for futures::executor::ThreadPool {
  fn schedule(&self, task: Task) { self.spawn_ok(async move { task() }); }
}

#[cfg(feature = "tokio-scheduler")]
impl Scheduler for tokio::runtime::Handle {
  fn schedule(&self, task: Task) { self.spawn_blocking(task); }
}
