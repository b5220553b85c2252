use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc::{channel, Receiver, Sender},
    Arc, Mutex,
  },
  thread,
};

use tracing::trace;

use super::{PoolShape, Scheduler, Task};

/// Thread-pool execution context.
///
/// One generic constructor covers every built-in variant; the
/// [`PoolShape`] decides how many workers may exist. Workers are spawned
/// lazily, pull tasks from a shared FIFO queue and park on it when idle.
/// Cloning yields another handle to the same pool.
#[derive(Clone)]
pub struct ThreadPoolScheduler {
  pool: Arc<Pool>,
}

impl ThreadPoolScheduler {
  pub fn new(shape: PoolShape) -> Self { Self::with_name("rivulet-pool", shape) }

  /// Like [`new`](Self::new), with a custom prefix for worker thread names.
  pub fn with_name(name: impl Into<String>, shape: PoolShape) -> Self {
    let (sender, receiver) = channel();
    ThreadPoolScheduler {
      pool: Arc::new(Pool {
        name: name.into(),
        max_workers: shape.max_workers(),
        sender,
        receiver: Mutex::new(receiver),
        idle: AtomicUsize::new(0),
        spawned: AtomicUsize::new(0),
      }),
    }
  }
}

impl Scheduler for ThreadPoolScheduler {
  fn schedule(&self, task: Task) { self.pool.submit(task); }
}

impl PoolShape {
  fn max_workers(self) -> Option<usize> {
    match self {
      PoolShape::Unbounded => None,
      PoolShape::Fixed(workers) => Some(workers.max(1)),
      PoolShape::Single => Some(1),
    }
  }
}

struct Pool {
  name: String,
  max_workers: Option<usize>,
  sender: Sender<Task>,
  receiver: Mutex<Receiver<Task>>,
  idle: AtomicUsize,
  spawned: AtomicUsize,
}

impl Pool {
  fn submit(self: &Arc<Self>, task: Task) {
    // The pool owns the receiver, so the send cannot fail.
    let _ = self.sender.send(task);
    if self.idle.load(Ordering::Relaxed) == 0 {
      self.spawn_worker();
    }
  }

  fn spawn_worker(self: &Arc<Self>) {
    let mut spawned = self.spawned.load(Ordering::Relaxed);
    loop {
      if self.max_workers.is_some_and(|max| spawned >= max) {
        return;
      }
      match self.spawned.compare_exchange(
        spawned,
        spawned + 1,
        Ordering::Relaxed,
        Ordering::Relaxed,
      ) {
        Ok(_) => break,
        Err(current) => spawned = current,
      }
    }

    let pool = self.clone();
    let name = format!("{}-{}", self.name, spawned);
    trace!(worker = %name, "spawning pool worker");
    thread::Builder::new()
      .name(name)
      .spawn(move || pool.worker_loop())
      .expect("failed to spawn pool worker");
  }

  fn worker_loop(&self) {
    loop {
      self.idle.fetch_add(1, Ordering::Relaxed);
      let task = self.receiver.lock().unwrap().recv();
      self.idle.fetch_sub(1, Ordering::Relaxed);
      match task {
        Ok(task) => task(),
        Err(_) => break,
      }
    }
    trace!(worker = ?thread::current().name(), "pool worker exiting");
  }
}
