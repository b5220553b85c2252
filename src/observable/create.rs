use crate::{
  error::StreamError,
  observable::{Observable, Stage},
  observer::{BoxedObserver, Observer},
};

/// Observable driven by a producer function.
///
/// This struct is created by [`create`].
pub struct Create<F> {
  producer: F,
}

/// Builds an observable from a producer.
///
/// The producer is called once per subscription with the (guarded) observer.
/// It is expected to call `next` zero or more times and then signal exactly
/// one terminal: either `observer.complete()` followed by `Ok(())`, or an
/// `Err` return, which the engine delivers as a single `error`
/// notification. An `Err` returned after a terminal was already signalled
/// still flows downstream; keeping the contract is the producer's job.
///
/// ```
/// use rivulet::prelude::*;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// observable::create(|observer: &mut dyn Observer<i32>| {
///   observer.next(1);
///   observer.next(2);
///   observer.complete();
///   Ok(())
/// })
/// .subscribe_next(move |v| sink.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
/// ```
pub fn create<Item, F>(producer: F) -> Observable<Item>
where
  Item: Send + 'static,
  F: Fn(&mut dyn Observer<Item>) -> Result<(), StreamError>
    + Send
    + Sync
    + 'static,
{
  Observable::from_stage(Create { producer })
}

impl<Item, F> Stage<Item> for Create<F>
where
  Item: Send + 'static,
  F: Fn(&mut dyn Observer<Item>) -> Result<(), StreamError>
    + Send
    + Sync
    + 'static,
{
  fn drive(&self, mut observer: BoxedObserver<Item>) {
    let sink: &mut dyn Observer<Item> = observer.as_mut();
    if let Err(err) = (self.producer)(sink) {
      observer.error(err);
    }
  }
}
