//! # Data Source Layer
//!
//! Every view gets its data through the [`DataSource`] trait: one async
//! `load()` that resolves once with a complete dataset. Views never know where
//! the data comes from, so a real backend can replace the fixtures without
//! touching filtering or aggregation.
//!
//! ## Implementations
//!
//! - [`fixture::FixtureSource`]: the built-in datasets, served after an
//!   artificial delay. Never fails.
//! - [`fs::FileSource`]: JSON files in a directory, one per dataset:
//!   ```text
//!   data/
//!   ├── shipments.json       # [ShipmentRecord]
//!   ├── orders.json          # [OrderRecord]
//!   ├── users.json           # [UserRecord]
//!   ├── recent_orders.json   # [RecentOrderRecord]
//!   ├── dashboard.json       # DashboardStats
//!   ├── fleet.json           # FleetOverview
//!   ├── trend.json           # ShipmentTrend
//!   ├── analytics.json       # AnalyticsReport
//!   └── account.json         # AccountSettings
//!   ```
//! - [`memory::InMemorySource`]: a fixed value or a simulated failure, for tests.
//!
//! ## Failure model
//!
//! A load either resolves with a dataset that passed [`Dataset::validate`] or
//! fails with `LoadFailure` (could not fetch) / `ValidationFailure` (fetched
//! but malformed). There are no partial results and no retries.

use crate::error::{DashError, Result};
use crate::metrics::{AccountSettings, AnalyticsReport, DashboardStats, FleetOverview, ShipmentTrend};
use crate::model::{OrderRecord, RecentOrderRecord, Record, ShipmentRecord, UserRecord};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

pub mod fixture;
pub mod fs;
pub mod memory;

/// Which artificial delay a fixture fetch uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Record collections behind the table views.
    Records,
    /// Dashboard headline stats, which the UI always fetched more slowly.
    Overview,
}

/// A named, self-checking dataset that a source can produce.
pub trait Dataset: DeserializeOwned + Send + Sync + 'static {
    const NAME: &'static str;
    const KIND: FetchKind = FetchKind::Records;

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<R: Record> Dataset for Vec<R> {
    const NAME: &'static str = R::COLLECTION;

    /// Every record passes its own checks and keys are unique.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.len());
        for record in self {
            if record.key().is_empty() {
                return Err(DashError::invalid(Self::NAME, "record with empty key"));
            }
            record
                .validate()
                .map_err(|reason| DashError::invalid(Self::NAME, reason))?;
            if !seen.insert(record.key()) {
                return Err(DashError::invalid(
                    Self::NAME,
                    format!("duplicate key {}", record.key()),
                ));
            }
        }
        Ok(())
    }
}

impl Dataset for DashboardStats {
    const NAME: &'static str = "dashboard";
    const KIND: FetchKind = FetchKind::Overview;
}

impl Dataset for FleetOverview {
    const NAME: &'static str = "fleet";

    fn validate(&self) -> Result<()> {
        match self.entries.iter().find(|e| e.count > e.total) {
            Some(entry) => Err(DashError::invalid(
                Self::NAME,
                format!("{} count {} exceeds fleet size {}", entry.status, entry.count, entry.total),
            )),
            None => Ok(()),
        }
    }
}

impl Dataset for ShipmentTrend {
    const NAME: &'static str = "trend";
}

impl Dataset for AnalyticsReport {
    const NAME: &'static str = "analytics";
}

impl Dataset for AccountSettings {
    const NAME: &'static str = "account";
}

/// Anything that can asynchronously produce a dataset.
#[async_trait]
pub trait DataSource<T>: Send + Sync {
    /// Resolve once with the complete dataset.
    async fn load(&self) -> Result<T>;
}

/// Load one dataset of type `T` from a source that may serve several.
pub async fn fetch<T, S>(source: &S) -> Result<T>
where
    S: DataSource<T> + ?Sized,
{
    source.load().await
}

/// A source able to feed every view of the dashboard.
pub trait DashboardBackend:
    DataSource<Vec<ShipmentRecord>>
    + DataSource<Vec<OrderRecord>>
    + DataSource<Vec<UserRecord>>
    + DataSource<Vec<RecentOrderRecord>>
    + DataSource<DashboardStats>
    + DataSource<FleetOverview>
    + DataSource<ShipmentTrend>
    + DataSource<AnalyticsReport>
    + DataSource<AccountSettings>
{
}

impl<T> DashboardBackend for T where
    T: DataSource<Vec<ShipmentRecord>>
        + DataSource<Vec<OrderRecord>>
        + DataSource<Vec<UserRecord>>
        + DataSource<Vec<RecentOrderRecord>>
        + DataSource<DashboardStats>
        + DataSource<FleetOverview>
        + DataSource<ShipmentTrend>
        + DataSource<AnalyticsReport>
        + DataSource<AccountSettings>
{
}
