//! Observer trait and adapters
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

use std::sync::{Arc, Mutex};

use crate::error::StreamError;

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: the consumer of data in reactive programming
///
/// An observer receives values, an error, or a completion notification from
/// an observable. Error and completion are mutually exclusive terminal
/// notifications for a well-formed source; the engine forwards whatever it
/// is given and does not police that contract.
///
/// All three methods take `&mut self` so that observers can be driven
/// through `&mut dyn Observer` without heap allocation at every producer
/// call site.
pub trait Observer<Item> {
  /// Receive the next value from the observable.
  fn next(&mut self, value: Item);

  /// Receive an error from the observable.
  fn error(&mut self, err: StreamError);

  /// Receive the completion notification.
  fn complete(&mut self);
}

/// Type-erased observer handed across operator and scheduler boundaries.
pub type BoxedObserver<Item> = Box<dyn Observer<Item> + Send>;

impl<Item, O> Observer<Item> for Box<O>
where
  O: Observer<Item> + ?Sized,
{
  #[inline]
  fn next(&mut self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&mut self, err: StreamError) { (**self).error(err) }

  #[inline]
  fn complete(&mut self) { (**self).complete() }
}

// ============================================================================
// Closure adapters
// ============================================================================

/// Closure adapter for the common case of only caring about values.
///
/// This enables the `subscribe_next` syntax: the closure becomes the `next`
/// handler, while `error` and `complete` are ignored.
#[derive(Clone)]
pub struct FnMutObserver<N>(pub N);

impl<Item, N> Observer<Item> for FnMutObserver<N>
where
  N: FnMut(Item),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.0)(value) }

  fn error(&mut self, _err: StreamError) {}

  fn complete(&mut self) {}
}

/// Closure adapter covering all three notification kinds, built by
/// `subscribe_all`.
#[derive(Clone)]
pub struct FnObserver<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> FnObserver<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self {
    FnObserver { next, error, complete }
  }
}

impl<Item, N, E, C> Observer<Item> for FnObserver<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(StreamError),
  C: FnMut(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(&mut self, err: StreamError) { (self.error)(err) }

  #[inline]
  fn complete(&mut self) { (self.complete)() }
}

// ============================================================================
// Shared observer
// ============================================================================

/// Mutex-shared downstream observer.
///
/// `flat_map` fans several upstream observers into one downstream, and
/// `observe_on` delivers from whatever worker the scheduler picked; both
/// need one observer reachable from several owners, possibly on several
/// threads at once.
pub(crate) struct SharedObserver<Item> {
  inner: Arc<Mutex<BoxedObserver<Item>>>,
}

impl<Item> SharedObserver<Item> {
  pub(crate) fn new(observer: BoxedObserver<Item>) -> Self {
    SharedObserver { inner: Arc::new(Mutex::new(observer)) }
  }
}

impl<Item> Clone for SharedObserver<Item> {
  fn clone(&self) -> Self { SharedObserver { inner: self.inner.clone() } }
}

impl<Item> Observer<Item> for SharedObserver<Item> {
  fn next(&mut self, value: Item) { self.inner.lock().unwrap().next(value) }

  fn error(&mut self, err: StreamError) {
    self.inner.lock().unwrap().error(err)
  }

  fn complete(&mut self) { self.inner.lock().unwrap().complete() }
}

// ============================================================================
// Tests
// ============================================================================
