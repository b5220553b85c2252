use crate::{
  observable::{Observable, Stage},
  observer::BoxedObserver,
  scheduler::Scheduler,
};

impl<Item: Send + 'static> Observable<Item> {
  /// Relocates the act of subscribing: the producer runs as a unit of work
  /// on `scheduler` instead of on the caller's thread.
  ///
  /// The returned token still flips synchronously on the caller's thread;
  /// production may start later, on whatever worker the scheduler picks,
  /// and the disposal gate applies there.
  pub fn subscribe_on<S>(&self, scheduler: S) -> Observable<Item>
  where
    S: Scheduler + Send + Sync + 'static,
  {
    Observable::from_stage(SubscribeOnOp { source: self.clone(), scheduler })
  }
}

/// Operator stage behind [`Observable::subscribe_on`].
pub struct SubscribeOnOp<Item, S> {
  source: Observable<Item>,
  scheduler: S,
}

impl<Item, S> Stage<Item> for SubscribeOnOp<Item, S>
where
  Item: Send + 'static,
  S: Scheduler + Send + Sync + 'static,
{
  fn drive(&self, observer: BoxedObserver<Item>) {
    let source = self.source.clone();
    self.scheduler.schedule(Box::new(move || source.drive(observer)));
  }
}
