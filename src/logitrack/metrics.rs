//! Dashboard, fleet and analytics display values.
//!
//! These are placeholder figures carried by the data source as-is: delivery
//! rate, change percentages, fleet efficiency and the analytics series are not
//! computed from any record store. The only arithmetic here is presentation
//! arithmetic (shares, attainment, trend direction) over the values given.

use crate::aggregate::{Change, Tile, TileValue};
use crate::error::{DashError, Result};
use crate::model::{ShipmentStatus, Tone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_shipments: u32,
    pub active_vehicles: u32,
    pub pending_orders: u32,
    pub delivery_rate: f64,
    pub shipments_change: f64,
    pub vehicles_change: f64,
    pub orders_change: f64,
    pub delivery_change: f64,
}

impl DashboardStats {
    pub fn tiles(&self) -> Vec<Tile> {
        vec![
            Tile::new("Total Shipments", TileValue::Count(self.total_shipments as usize))
                .with_change(Change::higher_is_better(self.shipments_change)),
            Tile::new("Active Vehicles", TileValue::Count(self.active_vehicles as usize))
                .with_change(Change::higher_is_better(self.vehicles_change)),
            Tile::new("Pending Orders", TileValue::Count(self.pending_orders as usize))
                .with_change(Change::higher_is_better(self.orders_change)),
            Tile::new("Delivery Rate", TileValue::Percent(self.delivery_rate))
                .with_change(Change::higher_is_better(self.delivery_change)),
        ]
    }

    /// Tiles shown while the stats fetch is still in flight.
    pub fn loading_tiles() -> Vec<Tile> {
        ["Total Shipments", "Active Vehicles", "Pending Orders"]
            .into_iter()
            .map(|title| Tile::new(title, TileValue::Count(0)).loading())
            .chain(std::iter::once(
                Tile::new("Delivery Rate", TileValue::Percent(0.0)).loading(),
            ))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetEntry {
    pub status: String,
    pub count: u32,
    pub total: u32,
    pub tone: Tone,
}

impl FleetEntry {
    /// Share of the fleet in this state, as a percentage.
    pub fn share(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.count) / f64::from(self.total) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverview {
    pub entries: Vec<FleetEntry>,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: String,
    pub delivered: u32,
    pub in_transit: u32,
    pub pending: u32,
}

impl TrendPoint {
    pub fn total(&self) -> u64 {
        u64::from(self.delivered) + u64::from(self.in_transit) + u64::from(self.pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentTrend {
    pub months: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
}

impl TimeRange {
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1 Month",
            TimeRange::ThreeMonths => "3 Months",
            TimeRange::SixMonths => "6 Months",
            TimeRange::OneYear => "1 Year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1month" => Ok(TimeRange::OneMonth),
            "3months" => Ok(TimeRange::ThreeMonths),
            "6months" => Ok(TimeRange::SixMonths),
            "1year" => Ok(TimeRange::OneYear),
            other => Err(DashError::UnknownTimeRange(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_revenue: f64,
    pub revenue_change: f64,
    pub total_shipments: u32,
    pub shipments_change: f64,
    pub active_routes: u32,
    pub routes_change: f64,
    pub avg_delivery_days: f64,
    pub delivery_time_change: f64,
}

impl AnalyticsOverview {
    pub fn tiles(&self) -> Vec<Tile> {
        vec![
            Tile::new("Total Revenue", TileValue::Money(self.total_revenue))
                .with_change(Change::higher_is_better(self.revenue_change)),
            Tile::new("Total Shipments", TileValue::Count(self.total_shipments as usize))
                .with_change(Change::higher_is_better(self.shipments_change)),
            Tile::new("Active Routes", TileValue::Count(self.active_routes as usize))
                .with_change(Change::higher_is_better(self.routes_change)),
            Tile::new(
                "Avg Delivery Time",
                TileValue::Measure {
                    value: self.avg_delivery_days,
                    unit: "days",
                },
            )
            .with_change(Change::lower_is_better(self.delivery_time_change)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
    pub shipments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: ShipmentStatus,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStat {
    pub route: String,
    pub shipments: u32,
    pub revenue: f64,
}

/// How a performance metric stands against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Met,
    OnTrack,
    Behind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub metric: String,
    pub value: f64,
    pub target: f64,
}

impl PerformanceMetric {
    /// Value as a percentage of target.
    pub fn attainment(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        self.value / self.target * 100.0
    }

    pub fn standing(&self) -> Standing {
        if self.value >= self.target {
            Standing::Met
        } else if self.value >= self.target * 0.8 {
            Standing::OnTrack
        } else {
            Standing::Behind
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub overview: AnalyticsOverview,
    pub revenue: Vec<RevenuePoint>,
    pub shipments_by_status: Vec<StatusSlice>,
    pub top_routes: Vec<RouteStat>,
    pub performance: Vec<PerformanceMetric>,
}

impl AnalyticsReport {
    /// Percentage of each status slice over the sum of all slices.
    pub fn status_shares(&self) -> Vec<(ShipmentStatus, f64)> {
        let total: u32 = self.shipments_by_status.iter().map(|s| s.value).sum();
        self.shipments_by_status
            .iter()
            .map(|s| {
                let share = if total == 0 {
                    0.0
                } else {
                    f64::from(s.value) / f64::from(total) * 100.0
                };
                (s.status, share)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub order_updates: bool,
    pub shipment_alerts: bool,
    pub system_maintenance: bool,
    pub weekly_reports: bool,
}

impl NotificationPrefs {
    /// (label, enabled) pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("Email Notifications", self.email_notifications),
            ("Order Updates", self.order_updates),
            ("Shipment Alerts", self.shipment_alerts),
            ("SMS Notifications", self.sms_notifications),
            ("System Maintenance", self.system_maintenance),
            ("Weekly Reports", self.weekly_reports),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub profile: Profile,
    pub notifications: NotificationPrefs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Trend;
    use crate::fixtures;

    #[test]
    fn trend_total_does_not_overflow() {
        let point: TrendPoint = serde_json::from_str(
            r#"{"month":"Jan","delivered":4000000000,"inTransit":400000000,"pending":1}"#,
        )
        .unwrap();
        assert_eq!(point.total(), 4_400_000_001);
    }

    #[test]
    fn delivery_rate_is_a_placeholder_value() {
        let stats = fixtures::dashboard_stats();
        let tiles = stats.tiles();
        assert_eq!(tiles[3].title, "Delivery Rate");
        assert_eq!(tiles[3].value, TileValue::Percent(94.2));
    }

    #[test]
    fn negative_change_trends_down() {
        let stats = fixtures::dashboard_stats();
        let change = stats.tiles()[1].change.unwrap();
        assert_eq!(change.trend(), Trend::Down);
        assert!(!change.is_favourable());
    }

    #[test]
    fn shorter_delivery_time_is_favourable() {
        let overview = fixtures::analytics().overview;
        let change = overview.tiles()[3].change.unwrap();
        assert_eq!(change.trend(), Trend::Down);
        assert!(change.is_favourable());
    }

    #[test]
    fn fleet_share() {
        let fleet = fixtures::fleet();
        let active = &fleet.entries[0];
        assert!((active.share() - 66.666).abs() < 0.01);
        let offline = &fleet.entries[3];
        assert_eq!(offline.share(), 0.0);
    }

    #[test]
    fn performance_standing_thresholds() {
        let metric = |value: f64| PerformanceMetric {
            metric: "m".into(),
            value,
            target: 100.0,
        };
        assert_eq!(metric(100.0).standing(), Standing::Met);
        assert_eq!(metric(80.0).standing(), Standing::OnTrack);
        assert_eq!(metric(79.9).standing(), Standing::Behind);
    }

    #[test]
    fn fixture_metrics_are_on_track() {
        let report = fixtures::analytics();
        let standings: Vec<Standing> = report.performance.iter().map(|m| m.standing()).collect();
        assert_eq!(
            standings,
            vec![
                Standing::OnTrack,
                Standing::OnTrack,
                Standing::OnTrack,
                Standing::OnTrack
            ]
        );
    }

    #[test]
    fn status_shares_sum_to_100() {
        let report = fixtures::analytics();
        let total: f64 = report.status_shares().iter().map(|(_, s)| s).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn parses_time_range() {
        assert_eq!("1year".parse::<TimeRange>().unwrap(), TimeRange::OneYear);
        assert!("2years".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::default(), TimeRange::SixMonths);
    }
}
