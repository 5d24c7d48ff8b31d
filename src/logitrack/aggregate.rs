//! Scalar summaries over a full record store.
//!
//! Aggregates always take the unfiltered record slice. A view hands this module
//! `store.records()`, never its filtered table, so the summary tiles describe
//! the whole dataset whatever the current search or status filter. A pending
//! store yields an empty slice, so every count and sum comes out as zero.

use crate::model::{
    DeliveryStage, OrderRecord, OrderStatus, Record, RecordStatus, RecentOrderRecord,
    ShipmentRecord, ShipmentStatus, UserRecord, UserStatus,
};
use serde::Serialize;

/// Number of records satisfying `predicate`.
pub fn count<R, P>(records: &[R], predicate: P) -> usize
where
    P: Fn(&R) -> bool,
{
    records.iter().filter(|r| predicate(r)).count()
}

/// Sum of a numeric field across all records. Empty input sums to zero.
pub fn sum<R, F>(records: &[R], field: F) -> f64
where
    F: Fn(&R) -> f64,
{
    records.iter().map(field).sum()
}

/// One entry per status value, in declaration order, zeros included.
pub fn count_by_status<R: Record>(records: &[R]) -> Vec<(R::Status, usize)> {
    R::Status::all()
        .iter()
        .map(|status| (*status, count(records, |r| r.status() == *status)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TileValue {
    Count(usize),
    Money(f64),
    Percent(f64),
    Measure { value: f64, unit: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// A period-over-period change shown beside a tile value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Change {
    pub percent: f64,
    pub lower_is_better: bool,
}

impl Change {
    pub fn higher_is_better(percent: f64) -> Self {
        Self {
            percent,
            lower_is_better: false,
        }
    }

    pub fn lower_is_better(percent: f64) -> Self {
        Self {
            percent,
            lower_is_better: true,
        }
    }

    pub fn trend(&self) -> Trend {
        if self.percent > 0.0 {
            Trend::Up
        } else if self.percent < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn is_favourable(&self) -> bool {
        match self.trend() {
            Trend::Up => !self.lower_is_better,
            Trend::Down => self.lower_is_better,
            Trend::Flat => true,
        }
    }
}

/// A titled summary value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub title: String,
    pub value: TileValue,
    pub change: Option<Change>,
    pub loading: bool,
}

impl Tile {
    pub fn new(title: impl Into<String>, value: TileValue) -> Self {
        Self {
            title: title.into(),
            value,
            change: None,
            loading: false,
        }
    }

    pub fn with_change(mut self, change: Change) -> Self {
        self.change = Some(change);
        self
    }

    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }
}

/// Summary tiles for one record type.
pub trait Summary: Record {
    fn tiles(records: &[Self]) -> Vec<Tile>;
}

fn status_tile<R: Record>(title: &str, records: &[R], status: R::Status) -> Tile {
    Tile::new(
        title,
        TileValue::Count(count(records, |r| r.status() == status)),
    )
}

impl Summary for ShipmentRecord {
    fn tiles(records: &[Self]) -> Vec<Tile> {
        vec![
            Tile::new("Total Shipments", TileValue::Count(records.len())),
            status_tile("In Transit", records, ShipmentStatus::InTransit),
            status_tile("Delivered", records, ShipmentStatus::Delivered),
            status_tile("Delayed", records, ShipmentStatus::Delayed),
        ]
    }
}

impl Summary for OrderRecord {
    fn tiles(records: &[Self]) -> Vec<Tile> {
        vec![
            Tile::new("Total Orders", TileValue::Count(records.len())),
            status_tile("Pending Orders", records, OrderStatus::Pending),
            Tile::new("Total Value", TileValue::Money(sum(records, |o| o.value))),
            status_tile("Completed", records, OrderStatus::Delivered),
        ]
    }
}

impl Summary for UserRecord {
    fn tiles(records: &[Self]) -> Vec<Tile> {
        vec![
            Tile::new("Total Users", TileValue::Count(records.len())),
            status_tile("Active", records, UserStatus::Active),
            status_tile("Inactive", records, UserStatus::Inactive),
        ]
    }
}

impl Summary for RecentOrderRecord {
    fn tiles(records: &[Self]) -> Vec<Tile> {
        vec![
            Tile::new("Orders", TileValue::Count(records.len())),
            status_tile("In Transit", records, DeliveryStage::InTransit),
            Tile::new("Order Value", TileValue::Money(sum(records, |o| o.value))),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn sum_of_empty_is_zero() {
        let empty: Vec<OrderRecord> = vec![];
        assert_eq!(sum(&empty, |o| o.value), 0.0);
    }

    #[test]
    fn sum_adds_field_values() {
        let mut orders = fixtures::orders();
        orders.truncate(2);
        orders[0].value = 100.0;
        orders[1].value = 250.0;
        assert_eq!(sum(&orders, |o| o.value), 350.0);
    }

    #[test]
    fn counts_in_transit_shipments() {
        let shipments = fixtures::shipments();
        assert_eq!(
            count(&shipments, |s| s.status == ShipmentStatus::InTransit),
            2
        );
    }

    #[test]
    fn breakdown_covers_every_status() {
        let orders = fixtures::orders();
        let breakdown = count_by_status(&orders);
        assert_eq!(breakdown.len(), OrderStatus::ALL.len());
        assert!(breakdown.iter().all(|(_, n)| *n == 1));

        let users = fixtures::users();
        assert_eq!(
            count_by_status(&users),
            vec![(UserStatus::Active, 3), (UserStatus::Inactive, 1)]
        );
    }

    #[test]
    fn order_tiles() {
        let tiles = OrderRecord::tiles(&fixtures::orders());
        let values: Vec<TileValue> = tiles.iter().map(|t| t.value).collect();
        assert_eq!(
            values,
            vec![
                TileValue::Count(5),
                TileValue::Count(1),
                TileValue::Money(702_000.0),
                TileValue::Count(1),
            ]
        );
    }

    #[test]
    fn shipment_tiles() {
        let tiles = ShipmentRecord::tiles(&fixtures::shipments());
        assert_eq!(tiles[0].value, TileValue::Count(5));
        assert_eq!(tiles[1].value, TileValue::Count(2));
        assert_eq!(tiles[2].value, TileValue::Count(1));
        assert_eq!(tiles[3].value, TileValue::Count(1));
    }

    #[test]
    fn tiles_over_nothing_are_zero() {
        let tiles = ShipmentRecord::tiles(&[]);
        assert!(tiles.iter().all(|t| t.value == TileValue::Count(0)));
    }

    #[test]
    fn change_favourability() {
        assert!(Change::higher_is_better(12.3).is_favourable());
        assert!(!Change::higher_is_better(-2.1).is_favourable());
        assert!(Change::lower_is_better(-5.2).is_favourable());
        assert_eq!(Change::higher_is_better(0.0).trend(), Trend::Flat);
    }
}
