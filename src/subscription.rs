use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

/// Cancellation token returned from `Observable::subscribe` to allow
/// cancelling delivery before the stream has finished.
///
/// The token is a shared atomic flag: clones refer to the same flag, so the
/// handle returned to the caller and the gate inside the subscription always
/// agree. The flag moves false to true exactly once and never back.
///
/// Disposal is cooperative. It suppresses any further deliveries to the
/// subscriber, but it cannot interrupt a producer that is already running;
/// a producer that ignores its observer will keep consuming resources after
/// disposal.
///
/// Each `subscribe` call gets its own token; tokens are never shared across
/// independent subscriptions, even to the same observable.
#[derive(Clone, Debug, Default)]
pub struct Disposable {
  disposed: Arc<AtomicBool>,
}

impl Disposable {
  pub fn new() -> Self { Self::default() }

  /// Stops further delivery. Idempotent.
  #[inline]
  pub fn dispose(&self) { self.disposed.store(true, Ordering::Relaxed); }

  #[inline]
  pub fn is_disposed(&self) -> bool { self.disposed.load(Ordering::Relaxed) }
}

#[cfg(test)]
mod test {
  use super::*;
  use std::thread;

  #[test]
  fn dispose_is_idempotent() {
    let token = Disposable::new();
    assert!(!token.is_disposed());
    token.dispose();
    assert!(token.is_disposed());
    token.dispose();
    assert!(token.is_disposed());
  }

  #[test]
  fn clones_share_the_flag() {
    let token = Disposable::new();
    let other = token.clone();
    other.dispose();
    assert!(token.is_disposed());
  }

  #[test]
  fn dispose_from_another_thread() {
    let token = Disposable::new();
    let remote = token.clone();
    thread::spawn(move || remote.dispose()).join().unwrap();
    assert!(token.is_disposed());
  }
}
