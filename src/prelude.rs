//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Error channel value
pub use crate::error::StreamError;
// Creation/Factories
pub use crate::observable::{self, create, from_iter, of, Observable};
// Observer trait and adapters
pub use crate::observer::{BoxedObserver, FnMutObserver, FnObserver, Observer};
// Scheduler capability, built-in pools and pool shapes
pub use crate::scheduler::{
  self, PoolShape, Scheduler, Task, ThreadPoolScheduler,
};
// Disposal-gating wrapper applied by `subscribe`
pub use crate::subscriber::Subscriber;
// Cancellation token
pub use crate::subscription::Disposable;
