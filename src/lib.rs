//! # rivulet: a push-based reactive-stream engine
//!
//! Build a lazily-constructed producer, attach a chain of transformation
//! stages, subscribe an observer to receive the output, and cancel delivery
//! at any point. Execution is synchronous on the subscribing thread unless a
//! scheduler is interposed.
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//!
//! observable::from_iter(0..10)
//!   .filter(|v| Ok(v % 2 == 0))
//!   .map(|v| Ok(v * 2))
//!   .subscribe_next(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A reusable description of how to produce values |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` notifications |
//! | [`Disposable`] | Token to cancel delivery for one subscription |
//! | [`Scheduler`] | Accepts units of work for asynchronous execution |
//!
//! Production is relocated with
//! [`subscribe_on`](Observable::subscribe_on) and delivery with
//! [`observe_on`](Observable::observe_on); the built-in execution contexts
//! live in [`scheduler`] (`io`, `computation`, `single`), all thin shape
//! configurations over one worker pool.
//!
//! Cancellation is cooperative: disposing a subscription suppresses further
//! deliveries but never interrupts a producer that is already running.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Disposable`]: subscription::Disposable
//! [`Scheduler`]: scheduler::Scheduler

pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod scheduler;
pub mod subscriber;
pub mod subscription;

// Re-export the prelude module
pub use prelude::*;
