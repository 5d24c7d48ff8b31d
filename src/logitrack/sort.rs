//! Table sorting, applied to the filtered sequence before pagination.
//!
//! Sorting is independent of filtering: it never adds or removes records, and
//! it is stable, so records that compare equal keep their fixture order.

use crate::error::{DashError, Result};
use crate::model::Record;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<K> {
    pub key: K,
    pub direction: Direction,
}

impl<K> SortOrder<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: Direction::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: Direction::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentSort {
    Id,
    EstimatedDelivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    Id,
    Quantity,
    Value,
    OrderDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSort {
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentOrderSort {
    OrderId,
    Value,
    DeliveryDate,
}

impl FromStr for ShipmentSort {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(ShipmentSort::Id),
            "delivery" => Ok(ShipmentSort::EstimatedDelivery),
            other => Err(DashError::UnknownSortKey(other.to_string())),
        }
    }
}

impl FromStr for OrderSort {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(OrderSort::Id),
            "quantity" => Ok(OrderSort::Quantity),
            "value" => Ok(OrderSort::Value),
            "date" => Ok(OrderSort::OrderDate),
            other => Err(DashError::UnknownSortKey(other.to_string())),
        }
    }
}

impl FromStr for UserSort {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(UserSort::Name),
            other => Err(DashError::UnknownSortKey(other.to_string())),
        }
    }
}

impl FromStr for RecentOrderSort {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(RecentOrderSort::OrderId),
            "value" => Ok(RecentOrderSort::Value),
            "delivery" => Ok(RecentOrderSort::DeliveryDate),
            other => Err(DashError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Stable in-place sort of record references.
pub fn sort_records<R: Record>(records: &mut [&R], order: SortOrder<R::SortKey>) {
    records.sort_by(|a, b| {
        let ord = a.compare_by(b, order.key);
        match order.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
}
