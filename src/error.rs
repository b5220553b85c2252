use std::{error::Error, fmt, sync::Arc};

/// Error value carried by a stream's error channel.
///
/// Errors travel through the observer chain as values, never as unwinding.
/// A producer or transform signals failure by returning `Err(StreamError)`,
/// and the engine turns that into a single `error` delivery downstream.
///
/// Cloning is cheap; the wrapped error is shared.
#[derive(Clone, Debug)]
pub struct StreamError {
  inner: Arc<dyn Error + Send + Sync>,
}

impl StreamError {
  /// Wraps any error type.
  pub fn new<E>(source: E) -> Self
  where
    E: Error + Send + Sync + 'static,
  {
    StreamError { inner: Arc::new(source) }
  }

  /// Builds an error that carries only a message.
  pub fn message(message: impl Into<String>) -> Self {
    StreamError { inner: Arc::new(MessageError(message.into())) }
  }
}

impl fmt::Display for StreamError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.inner, f)
  }
}

impl Error for StreamError {
  fn source(&self) -> Option<&(dyn Error + 'static)> { self.inner.source() }
}

impl From<String> for StreamError {
  fn from(message: String) -> Self { StreamError::message(message) }
}

impl From<&str> for StreamError {
  fn from(message: &str) -> Self { StreamError::message(message) }
}

#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl Error for MessageError {}
