use std::sync::Arc;

use crate::{
  error::StreamError,
  observer::{BoxedObserver, FnMutObserver, FnObserver, Observer},
  subscriber::Subscriber,
  subscription::Disposable,
};

mod create;
pub use create::{create, Create};
mod from_iter;
pub use from_iter::from_iter;
mod of;
pub use of::of;

/// A reusable, immutable description of how to push a sequence of values
/// into an observer. This is the most basic building block of the crate.
///
/// Constructing an observable, or deriving one through an operator, does no
/// work: it only records a stage. All production happens inside
/// [`subscribe`](Observable::subscribe), synchronously on the calling thread
/// unless a scheduler was interposed with
/// [`subscribe_on`](Observable::subscribe_on) or
/// [`observe_on`](Observable::observe_on).
///
/// Cloning shares the description, not any run state; every `subscribe`
/// call is an independent run.
pub struct Observable<Item> {
  stage: Arc<dyn Stage<Item>>,
}

impl<Item> Clone for Observable<Item> {
  fn clone(&self) -> Self { Observable { stage: self.stage.clone() } }
}

/// One link of an operator chain.
///
/// Each operator is a stage wrapping its source observable; `drive` wraps
/// the downstream observer in the stage's own adapter and hands it to the
/// source. The chain bottoms out at [`Create`], which runs the producer.
pub(crate) trait Stage<Item>: Send + Sync {
  fn drive(&self, observer: BoxedObserver<Item>);
}

impl<Item: Send + 'static> Observable<Item> {
  pub(crate) fn from_stage<S>(stage: S) -> Self
  where
    S: Stage<Item> + 'static,
  {
    Observable { stage: Arc::new(stage) }
  }

  /// Runs the stage chain against an already-guarded observer.
  pub(crate) fn drive(&self, observer: BoxedObserver<Item>) {
    self.stage.drive(observer)
  }

  /// Subscribes an observer and returns the token that cancels delivery.
  ///
  /// The producer is driven synchronously with a guard between it and
  /// `observer`: once the returned [`Disposable`] is disposed, no further
  /// notification reaches `observer`, regardless of what the producer keeps
  /// doing. A producer failure surfaces as one `error` call through the
  /// same guard; it never unwinds out of `subscribe`. Panics raised by
  /// `observer` itself are not caught.
  pub fn subscribe<O>(&self, observer: O) -> Disposable
  where
    O: Observer<Item> + Send + 'static,
  {
    let handle = Disposable::new();
    self.drive(Box::new(Subscriber::new(observer, handle.clone())));
    handle
  }

  /// Subscribes with a closure for values only.
  pub fn subscribe_next<N>(&self, next: N) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
  {
    self.subscribe(FnMutObserver(next))
  }

  /// Subscribes with one closure per notification kind.
  pub fn subscribe_all<N, E, C>(
    &self, next: N, error: E, complete: C,
  ) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(StreamError) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.subscribe(FnObserver::new(next, error, complete))
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[derive(Default)]
  struct Record {
    items: Vec<i32>,
    errors: Vec<String>,
    completed: u32,
  }

  fn recording_subscribe(
    observable: &Observable<i32>,
  ) -> Arc<Mutex<Record>> {
    let record = Arc::new(Mutex::new(Record::default()));
    let next = record.clone();
    let error = record.clone();
    let complete = record.clone();
    observable.subscribe_all(
      move |v| next.lock().unwrap().items.push(v),
      move |e| error.lock().unwrap().errors.push(e.to_string()),
      move || complete.lock().unwrap().completed += 1,
    );
    record
  }

  #[test]
  fn delivers_in_emission_order_then_completes() {
    let observable = observable::create(|observer: &mut dyn Observer<i32>| {
      observer.next(1);
      observer.next(2);
      observer.next(3);
      observer.complete();
      Ok(())
    });

    let record = recording_subscribe(&observable);
    let record = record.lock().unwrap();
    assert_eq!(record.items, vec![1, 2, 3]);
    assert_eq!(record.completed, 1);
    assert!(record.errors.is_empty());
  }

  #[test]
  fn producer_failure_becomes_one_error_delivery() {
    let observable = observable::create(|observer: &mut dyn Observer<i32>| {
      observer.next(1);
      Err(StreamError::message("boom"))
    });

    let record = recording_subscribe(&observable);
    let record = record.lock().unwrap();
    assert_eq!(record.items, vec![1]);
    assert_eq!(record.errors, vec!["boom".to_string()]);
    assert_eq!(record.completed, 0);
  }

  #[test]
  fn empty_stream_only_completes() {
    let observable = observable::create(|observer: &mut dyn Observer<i32>| {
      observer.complete();
      Ok(())
    });

    let record = recording_subscribe(&observable);
    let record = record.lock().unwrap();
    assert!(record.items.is_empty());
    assert_eq!(record.completed, 1);
  }

  #[test]
  fn source_is_reusable_across_subscriptions() {
    let observable = observable::from_iter(1..=4);

    let first = recording_subscribe(&observable);
    let second = recording_subscribe(&observable);
    assert_eq!(first.lock().unwrap().items, vec![1, 2, 3, 4]);
    assert_eq!(second.lock().unwrap().items, vec![1, 2, 3, 4]);
  }

  #[test]
  fn emissions_after_terminal_are_not_policed() {
    let observable = observable::create(|observer: &mut dyn Observer<i32>| {
      observer.next(1);
      observer.complete();
      observer.next(2);
      Ok(())
    });

    let record = recording_subscribe(&observable);
    let record = record.lock().unwrap();
    assert_eq!(record.items, vec![1, 2]);
    assert_eq!(record.completed, 1);
  }

  #[test]
  fn large_volume_is_delivered_exactly_once() {
    let observable = observable::from_iter(0..10_000);
    let record = recording_subscribe(&observable);
    let record = record.lock().unwrap();
    assert_eq!(record.items.len(), 10_000);
    assert_eq!(record.items.first(), Some(&0));
    assert_eq!(record.items.last(), Some(&9_999));
    assert_eq!(record.completed, 1);
  }
}
