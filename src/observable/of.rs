use crate::observable::{create, Observable};

/// Observable that emits a single value and completes.
pub fn of<Item>(value: Item) -> Observable<Item>
where
  Item: Clone + Send + Sync + 'static,
{
  create(move |observer| {
    observer.next(value.clone());
    observer.complete();
    Ok(())
  })
}
