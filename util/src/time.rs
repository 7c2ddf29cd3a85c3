use std::time::{Duration, Instant};

pub fn time_fn<F: FnOnce() -> T, T>(f: F) -> (Duration, T) {
  let start = Instant::now();
  let result = f();
  (start.elapsed(), result)
}

/// A point in time after which work should stop. `None` means no limit.
#[derive(Clone, Copy, Debug)]
pub struct Deadline(Option<Instant>);

impl Deadline {
  pub fn after(limit: Option<Duration>) -> Self {
    Self(limit.and_then(|limit| Instant::now().checked_add(limit)))
  }

  pub const fn never() -> Self {
    Self(None)
  }

  pub fn expired(&self) -> bool {
    self.0.is_some_and(|end| Instant::now() >= end)
  }
}
