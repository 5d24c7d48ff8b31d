use super::{DataSource, Dataset, FetchKind};
use crate::error::Result;
use crate::fixtures;
use crate::metrics::{AccountSettings, AnalyticsReport, DashboardStats, FleetOverview, ShipmentTrend};
use crate::model::{OrderRecord, RecentOrderRecord, ShipmentRecord, UserRecord};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_OVERVIEW_DELAY: Duration = Duration::from_millis(1000);

/// A dataset with a built-in value.
pub trait Fixture: Dataset {
    fn fixture() -> Self;
}

macro_rules! fixture {
    ($($ty:ty => $f:path),+ $(,)?) => {
        $(
            impl Fixture for $ty {
                fn fixture() -> Self {
                    $f()
                }
            }
        )+
    };
}

fixture! {
    Vec<ShipmentRecord> => fixtures::shipments,
    Vec<OrderRecord> => fixtures::orders,
    Vec<UserRecord> => fixtures::users,
    Vec<RecentOrderRecord> => fixtures::recent_orders,
    DashboardStats => fixtures::dashboard_stats,
    FleetOverview => fixtures::fleet,
    ShipmentTrend => fixtures::shipment_trend,
    AnalyticsReport => fixtures::analytics,
    AccountSettings => fixtures::account,
}

/// Serves the built-in datasets after a simulated network delay.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSource {
    records_delay: Duration,
    overview_delay: Duration,
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY, DEFAULT_OVERVIEW_DELAY)
    }
}

impl FixtureSource {
    pub fn new(records_delay: Duration, overview_delay: Duration) -> Self {
        Self {
            records_delay,
            overview_delay,
        }
    }

    /// No delay at all.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn delay_for(&self, kind: FetchKind) -> Duration {
        match kind {
            FetchKind::Records => self.records_delay,
            FetchKind::Overview => self.overview_delay,
        }
    }
}

#[async_trait]
impl<T: Fixture> DataSource<T> for FixtureSource {
    async fn load(&self) -> Result<T> {
        let delay = self.delay_for(T::KIND);
        debug!(dataset = T::NAME, delay_ms = delay.as_millis() as u64, "loading fixture");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(T::fixture())
    }
}
