use std::sync::Arc;

use crate::{
  error::StreamError,
  observable::{Observable, Stage},
  observer::{BoxedObserver, Observer, SharedObserver},
  scheduler::Scheduler,
};

impl<Item: Send + 'static> Observable<Item> {
  /// Relocates delivery: every notification is re-posted as its own unit of
  /// work on `scheduler`, so the subscriber's callbacks run on the
  /// scheduler's workers rather than on the producing thread.
  ///
  /// With a multi-worker scheduler, distinct notifications may be delivered
  /// by distinct workers, and their relative order is not guaranteed; only
  /// a single-worker FIFO scheduler preserves emission order.
  pub fn observe_on<S>(&self, scheduler: S) -> Observable<Item>
  where
    S: Scheduler + Send + Sync + 'static,
  {
    Observable::from_stage(ObserveOnOp {
      source: self.clone(),
      scheduler: Arc::new(scheduler),
    })
  }
}

/// Operator stage behind [`Observable::observe_on`].
pub struct ObserveOnOp<Item, S> {
  source: Observable<Item>,
  scheduler: Arc<S>,
}

impl<Item, S> Stage<Item> for ObserveOnOp<Item, S>
where
  Item: Send + 'static,
  S: Scheduler + Send + Sync + 'static,
{
  fn drive(&self, observer: BoxedObserver<Item>) {
    self.source.drive(Box::new(ObserveOnObserver {
      downstream: SharedObserver::new(observer),
      scheduler: self.scheduler.clone(),
    }));
  }
}

struct ObserveOnObserver<Item, S> {
  downstream: SharedObserver<Item>,
  scheduler: Arc<S>,
}

impl<Item, S> Observer<Item> for ObserveOnObserver<Item, S>
where
  Item: Send + 'static,
  S: Scheduler + Send + Sync + 'static,
{
  fn next(&mut self, value: Item) {
    let mut downstream = self.downstream.clone();
    self.scheduler.schedule(Box::new(move || downstream.next(value)));
  }

  fn error(&mut self, err: StreamError) {
    let mut downstream = self.downstream.clone();
    self.scheduler.schedule(Box::new(move || downstream.error(err)));
  }

  fn complete(&mut self) {
    let mut downstream = self.downstream.clone();
    self.scheduler.schedule(Box::new(move || downstream.complete()));
  }
}
