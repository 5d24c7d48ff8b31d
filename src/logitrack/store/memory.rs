use super::{DataSource, Dataset};
use crate::error::{DashError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Outcome<T> {
    Value(T),
    Fail(String),
}

/// A source that hands back a fixed value, or fails, on every load.
pub struct InMemorySource<T> {
    outcome: Outcome<T>,
    loads: AtomicUsize,
}

impl<T: Dataset + Clone> InMemorySource<T> {
    pub fn new(value: T) -> Self {
        Self {
            outcome: Outcome::Value(value),
            loads: AtomicUsize::new(0),
        }
    }

    /// Every load fails with `LoadFailure` carrying `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(reason.into()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of loads started so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Dataset + Clone> DataSource<T> for InMemorySource<T> {
    async fn load(&self) -> Result<T> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Value(value) => {
                value.validate()?;
                Ok(value.clone())
            }
            Outcome::Fail(reason) => Err(DashError::load(T::NAME, reason.clone())),
        }
    }
}
