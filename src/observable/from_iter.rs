use crate::observable::{create, Observable};

/// Observable that emits every item of an iterable and completes.
///
/// The iterable is cloned for each subscription, so the observable stays
/// reusable.
pub fn from_iter<I>(iter: I) -> Observable<I::Item>
where
  I: IntoIterator + Clone + Send + Sync + 'static,
  I::Item: Send + 'static,
{
  create(move |observer| {
    for value in iter.clone() {
      observer.next(value);
    }
    observer.complete();
    Ok(())
  })
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn emits_range_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    observable::from_iter(0..5)
      .subscribe_next(move |v| sink.lock().unwrap().push(v));

    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn emits_vec_items() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    observable::from_iter(vec!['a', 'b', 'c'])
      .subscribe_next(move |v| sink.lock().unwrap().push(v));

    assert_eq!(*seen.lock().unwrap(), vec!['a', 'b', 'c']);
  }
}
