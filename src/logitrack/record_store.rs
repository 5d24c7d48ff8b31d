//! The in-memory collection behind one view.
//!
//! A store starts `Pending` and becomes `Loaded` exactly once, when its source
//! resolves. Later loads are no-ops, so it is never mutated after that. While pending it reads as empty,
//! which is what lets filters and aggregates run unconditionally.

use crate::error::Result;
use crate::model::Record;
use crate::store::{DataSource, Dataset};
use tracing::{debug, info};

#[derive(Debug, Clone)]
enum State<R> {
    Pending,
    Loaded(Vec<R>),
}

#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    state: State<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn pending() -> Self {
        Self {
            state: State::Pending,
        }
    }

    /// A loaded store over records that pass validation.
    pub fn from_records(records: Vec<R>) -> Result<Self> {
        records.validate()?;
        Ok(Self {
            state: State::Loaded(records),
        })
    }

    /// Fetch the records from `source`. On failure the store is unchanged.
    /// A loaded store does not fetch again.
    pub async fn load<S>(&mut self, source: &S) -> Result<()>
    where
        S: DataSource<Vec<R>> + ?Sized,
    {
        if !self.is_loading() {
            debug!(dataset = R::COLLECTION, "store already loaded");
            return Ok(());
        }
        let records = source.load().await?;
        info!(dataset = R::COLLECTION, count = records.len(), "store mounted");
        self.state = State::Loaded(records);
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, State::Pending)
    }

    /// All records in source order; empty while pending.
    pub fn records(&self) -> &[R] {
        match &self.state {
            State::Pending => &[],
            State::Loaded(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records().iter().find(|r| r.key() == key)
    }
}
