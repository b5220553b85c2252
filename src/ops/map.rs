use std::{marker::PhantomData, sync::Arc};

use crate::{
  error::StreamError,
  observable::{Observable, Stage},
  observer::{BoxedObserver, Observer},
};

impl<Item: Send + 'static> Observable<Item> {
  /// Creates a new stream which calls `transform` on each value and emits
  /// its result.
  ///
  /// A transform returning `Err` emits one `error` delivery for that value
  /// and nothing else for it; the subscription itself is not torn down, so
  /// whatever the upstream keeps emitting continues to flow. Upstream
  /// errors and completion are forwarded unchanged.
  ///
  /// ```
  /// use rivulet::prelude::*;
  /// use std::sync::{Arc, Mutex};
  ///
  /// let doubled = Arc::new(Mutex::new(Vec::new()));
  /// let sink = doubled.clone();
  /// observable::from_iter(1..4)
  ///   .map(|v| Ok(v * 2))
  ///   .subscribe_next(move |v| sink.lock().unwrap().push(v));
  ///
  /// assert_eq!(*doubled.lock().unwrap(), vec![2, 4, 6]);
  /// ```
  pub fn map<Out, F>(&self, transform: F) -> Observable<Out>
  where
    Out: Send + 'static,
    F: Fn(Item) -> Result<Out, StreamError> + Send + Sync + 'static,
  {
    Observable::from_stage(MapOp {
      source: self.clone(),
      transform: Arc::new(transform),
      _marker: PhantomData,
    })
  }
}

/// Operator stage behind [`Observable::map`].
pub struct MapOp<In, Out, F> {
  source: Observable<In>,
  transform: Arc<F>,
  _marker: PhantomData<fn() -> Out>,
}

impl<In, Out, F> Stage<Out> for MapOp<In, Out, F>
where
  In: Send + 'static,
  Out: Send + 'static,
  F: Fn(In) -> Result<Out, StreamError> + Send + Sync + 'static,
{
  fn drive(&self, observer: BoxedObserver<Out>) {
    self.source.drive(Box::new(MapObserver {
      observer,
      transform: self.transform.clone(),
    }));
  }
}

struct MapObserver<O, F> {
  observer: O,
  transform: Arc<F>,
}

impl<In, Out, O, F> Observer<In> for MapObserver<O, F>
where
  O: Observer<Out>,
  F: Fn(In) -> Result<Out, StreamError>,
{
  fn next(&mut self, value: In) {
    match (self.transform)(value) {
      Ok(mapped) => self.observer.next(mapped),
      Err(err) => self.observer.error(err),
    }
  }

  fn error(&mut self, err: StreamError) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }
}
