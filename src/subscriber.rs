use crate::{
  error::StreamError, observer::Observer, subscription::Disposable,
};

/// Gates a subscriber's observer behind the subscription's cancellation
/// token. Every observer handed to `subscribe` gets wrapped in a
/// `Subscriber` before the producer is driven, so disposal applies no matter
/// which thread ends up delivering.
///
/// The gate is disposal only. A source that keeps emitting after a terminal
/// notification is forwarded as-is; honoring the one-terminal contract is
/// the producer's job, not this wrapper's.
pub struct Subscriber<O> {
  observer: O,
  stopped: Disposable,
}

impl<O> Subscriber<O> {
  pub(crate) fn new(observer: O, stopped: Disposable) -> Self {
    Subscriber { observer, stopped }
  }
}

impl<Item, O> Observer<Item> for Subscriber<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    if !self.stopped.is_disposed() {
      self.observer.next(value);
    }
  }

  fn error(&mut self, err: StreamError) {
    if !self.stopped.is_disposed() {
      self.observer.error(err);
    }
  }

  fn complete(&mut self) {
    if !self.stopped.is_disposed() {
      self.observer.complete();
    }
  }
}
