//! Domain records for the dashboard views.
//!
//! Each collection (shipments, orders, users, recent orders) is independent:
//! records have no identity beyond their string key and never reference each
//! other. Statuses are closed enums whose serialized form is the exact display
//! label (`"In Transit"`, not `"InTransit"`), so fixtures, JSON files and the
//! `--status` flag all speak the same vocabulary.

use crate::error::{DashError, Result};
use crate::sort::{OrderSort, RecentOrderSort, ShipmentSort, UserSort};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

macro_rules! parse_status {
    ($($name:ident),+) => {
        $(
            impl FromStr for $name {
                type Err = DashError;

                /// Exact, case-sensitive match against the display label.
                fn from_str(s: &str) -> Result<Self> {
                    $name::ALL
                        .iter()
                        .copied()
                        .find(|status| status.label() == s)
                        .ok_or_else(|| DashError::UnknownStatus(s.to_string()))
                }
            }
        )+
    };
}

labeled_enum!(ShipmentStatus {
    Pending => "Pending",
    InTransit => "In Transit",
    Delivered => "Delivered",
    Delayed => "Delayed",
});

labeled_enum!(OrderStatus {
    Pending => "Pending",
    Processing => "Processing",
    Shipped => "Shipped",
    Delivered => "Delivered",
    Cancelled => "Cancelled",
});

labeled_enum!(
    /// Stage of an order on the dashboard's recent orders table, which tracks
    /// orders into the transport leg.
    DeliveryStage {
        Pending => "Pending",
        Processing => "Processing",
        InTransit => "In Transit",
        Delivered => "Delivered",
    }
);

labeled_enum!(UserStatus {
    Active => "Active",
    Inactive => "Inactive",
});

labeled_enum!(Priority {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

labeled_enum!(UserRole {
    Admin => "Admin",
    Manager => "Manager",
    Operator => "Operator",
    Driver => "Driver",
});

parse_status!(ShipmentStatus, OrderStatus, DeliveryStage, UserStatus);

/// Semantic colour class for a status, independent of any terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Info,
    Caution,
    Critical,
}

/// A closed set of status values a record collection can be filtered on.
pub trait RecordStatus:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr<Err = DashError> + Send + Sync + 'static
{
    /// Every value, in declaration order.
    fn all() -> &'static [Self];
    fn tone(self) -> Tone;
}

impl RecordStatus for ShipmentStatus {
    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn tone(self) -> Tone {
        match self {
            ShipmentStatus::Delivered => Tone::Positive,
            ShipmentStatus::InTransit => Tone::Info,
            ShipmentStatus::Pending => Tone::Caution,
            ShipmentStatus::Delayed => Tone::Critical,
        }
    }
}

impl RecordStatus for OrderStatus {
    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn tone(self) -> Tone {
        match self {
            OrderStatus::Delivered => Tone::Positive,
            OrderStatus::Shipped => Tone::Info,
            OrderStatus::Processing | OrderStatus::Pending => Tone::Caution,
            OrderStatus::Cancelled => Tone::Critical,
        }
    }
}

impl RecordStatus for DeliveryStage {
    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn tone(self) -> Tone {
        match self {
            DeliveryStage::Delivered => Tone::Positive,
            DeliveryStage::InTransit => Tone::Info,
            DeliveryStage::Processing | DeliveryStage::Pending => Tone::Caution,
        }
    }
}

impl RecordStatus for UserStatus {
    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn tone(self) -> Tone {
        match self {
            UserStatus::Active => Tone::Positive,
            UserStatus::Inactive => Tone::Critical,
        }
    }
}

impl Priority {
    pub fn tone(self) -> Tone {
        match self {
            Priority::High => Tone::Critical,
            Priority::Medium => Tone::Caution,
            Priority::Low => Tone::Positive,
        }
    }
}

/// A record that can live in a [`RecordStore`](crate::record_store::RecordStore).
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Status: RecordStatus;
    type SortKey: Copy + Eq + fmt::Debug + Send + Sync + 'static;

    /// Dataset name, used for file names and error messages.
    const COLLECTION: &'static str;

    /// Unique key within a store.
    fn key(&self) -> &str;

    fn status(&self) -> Self::Status;

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;

    /// Per-record schema checks beyond what the type system enforces.
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    pub driver: String,
    pub vehicle: String,
    pub cargo: String,
    pub weight: String,
    pub estimated_delivery: NaiveDate,
    pub progress: u8,
}

impl Record for ShipmentRecord {
    type Status = ShipmentStatus;
    type SortKey = ShipmentSort;
    const COLLECTION: &'static str = "shipments";

    fn key(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ShipmentStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.origin.as_str(), self.destination.as_str()]
    }

    fn compare_by(&self, other: &Self, key: ShipmentSort) -> Ordering {
        match key {
            ShipmentSort::Id => self.id.cmp(&other.id),
            ShipmentSort::EstimatedDelivery => self.estimated_delivery.cmp(&other.estimated_delivery),
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.progress > 100 {
            return Err(format!(
                "shipment {} has progress {} (expected 0-100)",
                self.id, self.progress
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub value: f64,
    pub status: OrderStatus,
    pub priority: Priority,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub address: String,
}

impl OrderRecord {
    /// Stages shown on the order progress track.
    pub const PROGRESS_TRACK: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    /// Zero-based position of the order on [`Self::PROGRESS_TRACK`].
    /// Statuses off the track (cancelled) sit at the first step.
    pub fn progress_step(&self) -> usize {
        Self::PROGRESS_TRACK
            .iter()
            .position(|s| *s == self.status)
            .unwrap_or(0)
    }
}

impl Record for OrderRecord {
    type Status = OrderStatus;
    type SortKey = OrderSort;
    const COLLECTION: &'static str = "orders";

    fn key(&self) -> &str {
        &self.id
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str(), self.product.as_str()]
    }

    fn compare_by(&self, other: &Self, key: OrderSort) -> Ordering {
        match key {
            OrderSort::Id => self.id.cmp(&other.id),
            OrderSort::Quantity => self.quantity.cmp(&other.quantity),
            OrderSort::Value => self.value.total_cmp(&other.value),
            OrderSort::OrderDate => self.order_date.cmp(&other.order_date),
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        check_amount(&self.id, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl Record for UserRecord {
    type Status = UserStatus;
    type SortKey = UserSort;
    const COLLECTION: &'static str = "users";

    fn key(&self) -> &str {
        &self.email
    }

    fn status(&self) -> UserStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn compare_by(&self, other: &Self, key: UserSort) -> Ordering {
        match key {
            UserSort::Name => self.name.cmp(&other.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrderRecord {
    pub order_id: String,
    pub customer: String,
    pub destination: String,
    pub status: DeliveryStage,
    pub priority: Priority,
    pub value: f64,
    pub delivery_date: NaiveDate,
}

impl Record for RecentOrderRecord {
    type Status = DeliveryStage;
    type SortKey = RecentOrderSort;
    const COLLECTION: &'static str = "recent_orders";

    fn key(&self) -> &str {
        &self.order_id
    }

    fn status(&self) -> DeliveryStage {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_id.as_str(),
            self.customer.as_str(),
            self.destination.as_str(),
        ]
    }

    fn compare_by(&self, other: &Self, key: RecentOrderSort) -> Ordering {
        match key {
            RecentOrderSort::OrderId => self.order_id.cmp(&other.order_id),
            RecentOrderSort::Value => self.value.total_cmp(&other.value),
            RecentOrderSort::DeliveryDate => self.delivery_date.cmp(&other.delivery_date),
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        check_amount(&self.order_id, self.value)
    }
}

fn check_amount(key: &str, value: f64) -> std::result::Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} has invalid value {}", key, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn status_labels_parse_exactly() {
        assert_eq!(
            "In Transit".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::InTransit
        );
        assert!("in transit".parse::<ShipmentStatus>().is_err());
        assert!("InTransit".parse::<ShipmentStatus>().is_err());
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&ShipmentStatus::InTransit).unwrap();
        assert_eq!(json, "\"In Transit\"");
    }

    #[test]
    fn order_progress_step_follows_track() {
        let mut order = fixtures::orders()[0].clone();
        order.status = OrderStatus::Shipped;
        assert_eq!(order.progress_step(), 2);
        order.status = OrderStatus::Delivered;
        assert_eq!(order.progress_step(), 3);
        order.status = OrderStatus::Cancelled;
        assert_eq!(order.progress_step(), 0);
    }

    #[test]
    fn shipment_progress_over_100_is_invalid() {
        let mut shipment = fixtures::shipments()[0].clone();
        shipment.progress = 101;
        assert!(shipment.validate().is_err());
    }

    #[test]
    fn negative_order_value_is_invalid() {
        let mut order = fixtures::orders()[0].clone();
        order.value = -1.0;
        assert!(order.validate().is_err());
        order.value = f64::NAN;
        assert!(order.validate().is_err());
    }

    #[test]
    fn shipment_record_reads_camel_case_json() {
        let json = r#"{
            "id": "SH900", "origin": "A", "destination": "B", "status": "Delayed",
            "driver": "D", "vehicle": "TRK-900", "cargo": "C", "weight": "1 ton",
            "estimatedDelivery": "2024-06-19", "progress": 10
        }"#;
        let shipment: ShipmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.status, ShipmentStatus::Delayed);
        assert_eq!(
            shipment.estimated_delivery,
            NaiveDate::from_ymd_opt(2024, 6, 19).unwrap()
        );
    }
}
