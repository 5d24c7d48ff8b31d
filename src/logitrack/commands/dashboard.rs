//! The overview screen: headline stats, fleet status, shipment trend and the
//! recent orders table, each fed by its own independent load.
//!
//! All four loads run concurrently and resolve in whatever order the source
//! dictates. With a deadline, any load still in flight when it passes is
//! dropped, which is the same as the panel unmounting before its data
//! arrived: the panel keeps rendering its loading state.

use crate::commands::{load_page, pending_page, CmdResult, DashboardData, ListRequest, Listing};
use crate::error::Result;
use crate::metrics::{DashboardStats, FleetOverview, ShipmentTrend};
use crate::model::RecentOrderRecord;
use crate::route::Route;
use crate::store::{fetch, DataSource};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

async fn within<T, F>(deadline: Option<Duration>, panel: &str, load: F) -> Result<Option<T>>
where
    F: Future<Output = Result<T>>,
{
    let Some(limit) = deadline else {
        return load.await.map(Some);
    };
    match tokio::time::timeout(limit, load).await {
        Ok(result) => result.map(Some),
        Err(_) => {
            debug!(panel, "still loading at deadline");
            Ok(None)
        }
    }
}

pub async fn run<S>(
    source: &S,
    recent: &ListRequest<RecentOrderRecord>,
    deadline: Option<Duration>,
) -> Result<CmdResult>
where
    S: DataSource<DashboardStats>
        + DataSource<FleetOverview>
        + DataSource<ShipmentTrend>
        + DataSource<Vec<RecentOrderRecord>>
        + ?Sized,
{
    let (stats, fleet, trend, recent_page) = tokio::try_join!(
        within(deadline, "stats", fetch::<DashboardStats, S>(source)),
        within(deadline, "fleet", fetch::<FleetOverview, S>(source)),
        within(deadline, "trend", fetch::<ShipmentTrend, S>(source)),
        within(deadline, "recent orders", load_page(source, recent)),
    )?;

    let tiles = match &stats {
        Some(stats) => stats.tiles(),
        None => DashboardStats::loading_tiles(),
    };
    let (page, recent_tiles) = recent_page.unwrap_or_else(|| pending_page(recent));

    let mut result = CmdResult::for_route(Route::Dashboard)
        .with_tiles(tiles)
        .with_listing(Listing::RecentOrders(page));
    result.dashboard = Some(DashboardData {
        stats,
        fleet,
        trend,
        recent_tiles,
    });
    Ok(result)
}
