use std::{marker::PhantomData, sync::Arc};

use crate::{
  error::StreamError,
  observable::{Observable, Stage},
  observer::{BoxedObserver, Observer, SharedObserver},
};

impl<Item: Send + 'static> Observable<Item> {
  /// Maps each value to an inner observable and merges their emissions into
  /// one stream.
  ///
  /// Every inner observable is subscribed as soon as its outer value
  /// arrives. Inner values and inner errors flow straight downstream; an
  /// inner completion is swallowed, so the merged stream completes when the
  /// *outer* source completes. Inner subscriptions are not tracked or
  /// joined: the outer completion can reach the subscriber while inner
  /// streams are still emitting, and values from different inner streams
  /// may interleave freely. Order is only guaranteed within one inner
  /// stream, and, for synchronous producers, relative to the outer value
  /// that spawned it.
  pub fn flat_map<Out, F>(&self, transform: F) -> Observable<Out>
  where
    Out: Send + 'static,
    F: Fn(Item) -> Result<Observable<Out>, StreamError>
      + Send
      + Sync
      + 'static,
  {
    Observable::from_stage(FlatMapOp {
      source: self.clone(),
      transform: Arc::new(transform),
      _marker: PhantomData,
    })
  }
}

/// Operator stage behind [`Observable::flat_map`].
pub struct FlatMapOp<In, Out, F> {
  source: Observable<In>,
  transform: Arc<F>,
  _marker: PhantomData<fn() -> Out>,
}

impl<In, Out, F> Stage<Out> for FlatMapOp<In, Out, F>
where
  In: Send + 'static,
  Out: Send + 'static,
  F: Fn(In) -> Result<Observable<Out>, StreamError> + Send + Sync + 'static,
{
  fn drive(&self, observer: BoxedObserver<Out>) {
    self.source.drive(Box::new(OuterObserver {
      downstream: SharedObserver::new(observer),
      transform: self.transform.clone(),
    }));
  }
}

struct OuterObserver<Out, F> {
  downstream: SharedObserver<Out>,
  transform: Arc<F>,
}

impl<In, Out, F> Observer<In> for OuterObserver<Out, F>
where
  In: Send + 'static,
  Out: Send + 'static,
  F: Fn(In) -> Result<Observable<Out>, StreamError> + Send + Sync + 'static,
{
  fn next(&mut self, value: In) {
    match (self.transform)(value) {
      Ok(inner) => {
        // The inner handle is dropped on purpose: inner streams run
        // independently of the outer subscription's lifecycle.
        inner.subscribe(InnerObserver { downstream: self.downstream.clone() });
      }
      Err(err) => self.downstream.error(err),
    }
  }

  fn error(&mut self, err: StreamError) { self.downstream.error(err) }

  fn complete(&mut self) { self.downstream.complete() }
}

struct InnerObserver<Out> {
  downstream: SharedObserver<Out>,
}

impl<Out: Send + 'static> Observer<Out> for InnerObserver<Out> {
  fn next(&mut self, value: Out) { self.downstream.next(value) }

  fn error(&mut self, err: StreamError) { self.downstream.error(err) }

  // Only the outer source completes the merged stream.
  fn complete(&mut self) {}
}
