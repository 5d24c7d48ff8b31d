//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every dashboard operation, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*` function
//! - **Owns** the data source and the config directory
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! It does no business logic, no I/O of its own and no formatting.
//!
//! ## Generic Over DataSource
//!
//! `DashApi<S: DashboardBackend>` works with any source that can produce every
//! dataset:
//! - Fixtures: `DashApi<FixtureSource>`
//! - JSON files: `DashApi<FileSource>`
//!
//! API tests check dispatch and argument passing. Filtering, aggregation and
//! loading are covered in their own modules.

use crate::commands::{self, CmdResult, ListRequest};
use crate::error::Result;
use crate::metrics::TimeRange;
use crate::model::{OrderRecord, RecentOrderRecord, ShipmentRecord, UserRecord};
use crate::store::DashboardBackend;
use std::path::PathBuf;
use std::time::Duration;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, Detail, Listing, MessageLevel};

/// The main API facade for dashboard operations.
pub struct DashApi<S: DashboardBackend> {
    source: S,
    config_dir: PathBuf,
}

impl<S: DashboardBackend> DashApi<S> {
    pub fn new(source: S, config_dir: PathBuf) -> Self {
        Self { source, config_dir }
    }

    pub async fn dashboard(
        &self,
        recent: &ListRequest<RecentOrderRecord>,
        deadline: Option<Duration>,
    ) -> Result<CmdResult> {
        commands::dashboard::run(&self.source, recent, deadline).await
    }

    pub async fn shipments(&self, req: &ListRequest<ShipmentRecord>) -> Result<CmdResult> {
        commands::shipments::list(&self.source, req).await
    }

    pub async fn shipment(&self, id: &str) -> Result<CmdResult> {
        commands::shipments::detail(&self.source, id).await
    }

    pub async fn orders(&self, req: &ListRequest<OrderRecord>) -> Result<CmdResult> {
        commands::orders::list(&self.source, req).await
    }

    pub async fn order(&self, id: &str) -> Result<CmdResult> {
        commands::orders::detail(&self.source, id).await
    }

    pub async fn analytics(&self, range: TimeRange) -> Result<CmdResult> {
        commands::analytics::run(&self.source, range).await
    }

    pub async fn settings(&self, team: &ListRequest<UserRecord>) -> Result<CmdResult> {
        commands::settings::run(&self.source, team).await
    }

    pub fn routes(&self) -> CmdResult {
        commands::routes::run()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
