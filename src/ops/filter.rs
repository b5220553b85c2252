use std::sync::Arc;

use crate::{
  error::StreamError,
  observable::{Observable, Stage},
  observer::{BoxedObserver, Observer},
};

impl<Item: Send + 'static> Observable<Item> {
  /// Emits only the values for which `predicate` returns `Ok(true)`.
  ///
  /// A predicate returning `Err` emits one `error` delivery for that value,
  /// with the same non-terminating behavior as a failed `map` transform.
  /// Upstream errors and completion are forwarded unchanged.
  ///
  /// ```
  /// use rivulet::prelude::*;
  /// use std::sync::{Arc, Mutex};
  ///
  /// let evens = Arc::new(Mutex::new(Vec::new()));
  /// let sink = evens.clone();
  /// observable::from_iter(0..10)
  ///   .filter(|v| Ok(v % 2 == 0))
  ///   .subscribe_next(move |v| sink.lock().unwrap().push(v));
  ///
  /// assert_eq!(*evens.lock().unwrap(), vec![0, 2, 4, 6, 8]);
  /// ```
  pub fn filter<F>(&self, predicate: F) -> Observable<Item>
  where
    F: Fn(&Item) -> Result<bool, StreamError> + Send + Sync + 'static,
  {
    Observable::from_stage(FilterOp {
      source: self.clone(),
      predicate: Arc::new(predicate),
    })
  }
}

/// Operator stage behind [`Observable::filter`].
pub struct FilterOp<Item, F> {
  source: Observable<Item>,
  predicate: Arc<F>,
}

impl<Item, F> Stage<Item> for FilterOp<Item, F>
where
  Item: Send + 'static,
  F: Fn(&Item) -> Result<bool, StreamError> + Send + Sync + 'static,
{
  fn drive(&self, observer: BoxedObserver<Item>) {
    self.source.drive(Box::new(FilterObserver {
      observer,
      predicate: self.predicate.clone(),
    }));
  }
}

struct FilterObserver<O, F> {
  observer: O,
  predicate: Arc<F>,
}

impl<Item, O, F> Observer<Item> for FilterObserver<O, F>
where
  O: Observer<Item>,
  F: Fn(&Item) -> Result<bool, StreamError>,
{
  fn next(&mut self, value: Item) {
    match (self.predicate)(&value) {
      Ok(true) => self.observer.next(value),
      Ok(false) => {}
      Err(err) => self.observer.error(err),
    }
  }

  fn error(&mut self, err: StreamError) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }
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

  fn record(observable: &Observable<i32>) -> Arc<Mutex<Record>> {
    let state = Arc::new(Mutex::new(Record::default()));
    let next = state.clone();
    let error = state.clone();
    let complete = state.clone();
    observable.subscribe_all(
      move |v| next.lock().unwrap().items.push(v),
      move |e| error.lock().unwrap().errors.push(e.to_string()),
      move || complete.lock().unwrap().completed += 1,
    );
    state
  }

  #[test]
  fn keeps_only_matching_values() {
    let evens = observable::from_iter(1..=6).filter(|v| Ok(v % 2 == 0));
    assert_eq!(record(&evens).lock().unwrap().items, vec![2, 4, 6]);
  }

  #[test]
  fn always_true_predicate_is_identity() {
    let source = observable::from_iter(1..=5);
    let passthrough = source.filter(|_| Ok(true));

    let direct = record(&source);
    let filtered = record(&passthrough);
    let direct = direct.lock().unwrap();
    let filtered = filtered.lock().unwrap();
    assert_eq!(filtered.items, direct.items);
    assert_eq!(filtered.completed, direct.completed);
    assert_eq!(filtered.errors, direct.errors);
  }

  #[test]
  fn predicate_failure_becomes_error_delivery() {
    let flaky = observable::from_iter(1..=3).filter(|v| {
      if *v == 2 {
        Err(StreamError::message("cannot judge"))
      } else {
        Ok(true)
      }
    });

    let state = record(&flaky);
    let state = state.lock().unwrap();
    assert_eq!(state.items, vec![1, 3]);
    assert_eq!(state.errors, vec!["cannot judge".to_string()]);
    assert_eq!(state.completed, 1);
  }
}
