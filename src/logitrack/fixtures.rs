//! Hard-coded datasets served by [`FixtureSource`](crate::store::fixture::FixtureSource).

use crate::metrics::{
    AccountSettings, AnalyticsOverview, AnalyticsReport, DashboardStats, FleetEntry,
    FleetOverview, NotificationPrefs, PerformanceMetric, Profile, RevenuePoint, RouteStat,
    ShipmentTrend, StatusSlice, TrendPoint,
};
use crate::model::{
    DeliveryStage, OrderRecord, OrderStatus, Priority, RecentOrderRecord, ShipmentRecord,
    ShipmentStatus, Tone, UserRecord, UserRole, UserStatus,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid calendar dates")
}

#[allow(clippy::too_many_arguments)]
fn shipment(
    id: &str,
    origin: &str,
    destination: &str,
    status: ShipmentStatus,
    driver: &str,
    cargo: &str,
    weight: &str,
    eta: NaiveDate,
    progress: u8,
) -> ShipmentRecord {
    ShipmentRecord {
        id: id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        status,
        driver: driver.to_string(),
        vehicle: id.replace("SH", "TRK-"),
        cargo: cargo.to_string(),
        weight: weight.to_string(),
        estimated_delivery: eta,
        progress,
    }
}

pub fn shipments() -> Vec<ShipmentRecord> {
    use ShipmentStatus::*;
    vec![
        shipment(
            "SH001",
            "New York, NY",
            "Los Angeles, CA",
            InTransit,
            "John Smith",
            "Electronics",
            "2.5 tons",
            date(2024, 6, 16),
            65,
        ),
        shipment(
            "SH002",
            "Chicago, IL",
            "Miami, FL",
            Delivered,
            "Sarah Johnson",
            "Furniture",
            "3.2 tons",
            date(2024, 6, 14),
            100,
        ),
        shipment(
            "SH003",
            "Seattle, WA",
            "Denver, CO",
            Pending,
            "Mike Wilson",
            "Medical Supplies",
            "1.8 tons",
            date(2024, 6, 18),
            0,
        ),
        shipment(
            "SH004",
            "Houston, TX",
            "Phoenix, AZ",
            InTransit,
            "Emma Davis",
            "Food Products",
            "2.1 tons",
            date(2024, 6, 17),
            45,
        ),
        shipment(
            "SH005",
            "Boston, MA",
            "Atlanta, GA",
            Delayed,
            "Robert Brown",
            "Textiles",
            "2.8 tons",
            date(2024, 6, 19),
            30,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    customer: &str,
    product: &str,
    quantity: u32,
    value: f64,
    status: OrderStatus,
    priority: Priority,
    ordered: NaiveDate,
    delivery: NaiveDate,
    address: &str,
) -> OrderRecord {
    OrderRecord {
        id: id.to_string(),
        customer: customer.to_string(),
        product: product.to_string(),
        quantity,
        value,
        status,
        priority,
        order_date: ordered,
        delivery_date: delivery,
        address: address.to_string(),
    }
}

pub fn orders() -> Vec<OrderRecord> {
    vec![
        order(
            "ORD001",
            "ABC Corporation",
            "Industrial Equipment",
            5,
            125_000.0,
            OrderStatus::Processing,
            Priority::High,
            date(2024, 6, 10),
            date(2024, 6, 20),
            "123 Business Ave, New York, NY",
        ),
        order(
            "ORD002",
            "XYZ Industries",
            "Raw Materials",
            12,
            89_000.0,
            OrderStatus::Shipped,
            Priority::Medium,
            date(2024, 6, 8),
            date(2024, 6, 18),
            "456 Factory St, Chicago, IL",
        ),
        order(
            "ORD003",
            "Tech Solutions Ltd",
            "Computer Hardware",
            25,
            156_000.0,
            OrderStatus::Pending,
            Priority::Low,
            date(2024, 6, 12),
            date(2024, 6, 25),
            "789 Tech Park, San Francisco, CA",
        ),
        order(
            "ORD004",
            "Global Retail Co",
            "Consumer Goods",
            100,
            234_000.0,
            OrderStatus::Delivered,
            Priority::High,
            date(2024, 6, 5),
            date(2024, 6, 15),
            "321 Mall Blvd, Los Angeles, CA",
        ),
        order(
            "ORD005",
            "Healthcare Plus",
            "Medical Equipment",
            8,
            98_000.0,
            OrderStatus::Cancelled,
            Priority::Medium,
            date(2024, 6, 11),
            date(2024, 6, 22),
            "654 Medical Center, Houston, TX",
        ),
    ]
}

pub fn users() -> Vec<UserRecord> {
    let user = |name: &str, email: &str, role, status| UserRecord {
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
    };
    vec![
        user("John Smith", "john@company.com", UserRole::Admin, UserStatus::Active),
        user("Sarah Johnson", "sarah@company.com", UserRole::Manager, UserStatus::Active),
        user("Mike Wilson", "mike@company.com", UserRole::Driver, UserStatus::Active),
        user("Emma Davis", "emma@company.com", UserRole::Operator, UserStatus::Inactive),
    ]
}

pub fn recent_orders() -> Vec<RecentOrderRecord> {
    let row = |n: u32, customer: &str, destination: &str, status, priority, value: f64, day| {
        RecentOrderRecord {
            order_id: format!("ORD-2024-{:03}", n),
            customer: customer.to_string(),
            destination: destination.to_string(),
            status,
            priority,
            value,
            delivery_date: date(2024, 6, day),
        }
    };
    vec![
        row(1, "Acme Corp", "New York, NY", DeliveryStage::InTransit, Priority::High, 2500.0, 15),
        row(2, "Tech Solutions Inc", "Los Angeles, CA", DeliveryStage::Pending, Priority::Medium, 1800.0, 16),
        row(3, "Global Logistics", "Chicago, IL", DeliveryStage::Delivered, Priority::Low, 3200.0, 14),
        row(4, "Manufacturing Plus", "Houston, TX", DeliveryStage::Processing, Priority::High, 4100.0, 17),
        row(5, "Retail Chain Co", "Miami, FL", DeliveryStage::InTransit, Priority::Medium, 2900.0, 18),
    ]
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_shipments: 1247,
        active_vehicles: 18,
        pending_orders: 89,
        delivery_rate: 94.2,
        shipments_change: 12.3,
        vehicles_change: -2.1,
        orders_change: 8.7,
        delivery_change: 1.2,
    }
}

pub fn fleet() -> FleetOverview {
    let entry = |status: &str, count, tone| FleetEntry {
        status: status.to_string(),
        count,
        total: 18,
        tone,
    };
    FleetOverview {
        entries: vec![
            entry("Active", 12, Tone::Positive),
            entry("In Transit", 4, Tone::Info),
            entry("Maintenance", 2, Tone::Caution),
            entry("Offline", 0, Tone::Critical),
        ],
        efficiency: 88.0,
    }
}

pub fn shipment_trend() -> ShipmentTrend {
    let point = |month: &str, delivered, pending, in_transit| TrendPoint {
        month: month.to_string(),
        delivered,
        in_transit,
        pending,
    };
    ShipmentTrend {
        months: vec![
            point("Jan", 400, 240, 160),
            point("Feb", 300, 139, 221),
            point("Mar", 200, 980, 290),
            point("Apr", 278, 390, 200),
            point("May", 189, 480, 181),
            point("Jun", 239, 380, 250),
            point("Jul", 349, 430, 210),
        ],
    }
}

pub fn analytics() -> AnalyticsReport {
    let revenue = |month: &str, revenue: f64, shipments| RevenuePoint {
        month: month.to_string(),
        revenue,
        shipments,
    };
    let route = |route: &str, shipments, revenue: f64| RouteStat {
        route: route.to_string(),
        shipments,
        revenue,
    };
    let metric = |metric: &str, value: f64, target: f64| PerformanceMetric {
        metric: metric.to_string(),
        value,
        target,
    };
    AnalyticsReport {
        overview: AnalyticsOverview {
            total_revenue: 2_845_000.0,
            revenue_change: 12.5,
            total_shipments: 1247,
            shipments_change: 8.3,
            active_routes: 23,
            routes_change: -2.1,
            avg_delivery_days: 2.8,
            delivery_time_change: -5.2,
        },
        revenue: vec![
            revenue("Jan", 185_000.0, 156),
            revenue("Feb", 210_000.0, 178),
            revenue("Mar", 235_000.0, 195),
            revenue("Apr", 258_000.0, 212),
            revenue("May", 280_000.0, 234),
            revenue("Jun", 312_000.0, 267),
        ],
        shipments_by_status: vec![
            StatusSlice {
                status: ShipmentStatus::Delivered,
                value: 687,
            },
            StatusSlice {
                status: ShipmentStatus::InTransit,
                value: 324,
            },
            StatusSlice {
                status: ShipmentStatus::Pending,
                value: 156,
            },
            StatusSlice {
                status: ShipmentStatus::Delayed,
                value: 80,
            },
        ],
        top_routes: vec![
            route("NY - LA", 89, 234_000.0),
            route("Chicago - Miami", 76, 198_000.0),
            route("Seattle - Denver", 65, 167_000.0),
            route("Houston - Phoenix", 58, 145_000.0),
            route("Boston - Atlanta", 52, 132_000.0),
        ],
        performance: vec![
            metric("On-Time Delivery", 94.2, 95.0),
            metric("Fleet Utilization", 87.5, 90.0),
            metric("Customer Satisfaction", 91.8, 92.0),
            metric("Cost Efficiency", 78.3, 85.0),
        ],
    }
}

pub fn account() -> AccountSettings {
    AccountSettings {
        profile: Profile {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@company.com".into(),
            phone: "+1 (555) 123-4567".into(),
            position: "Logistics Manager".into(),
            department: "Operations".into(),
            timezone: "America/New_York".into(),
        },
        notifications: NotificationPrefs {
            email_notifications: true,
            sms_notifications: false,
            order_updates: true,
            shipment_alerts: true,
            system_maintenance: true,
            weekly_reports: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dataset;

    #[test]
    fn record_fixtures_pass_validation() {
        shipments().validate().unwrap();
        orders().validate().unwrap();
        users().validate().unwrap();
        recent_orders().validate().unwrap();
    }

    #[test]
    fn order_statuses_cover_the_lifecycle() {
        let statuses: Vec<OrderStatus> = orders().iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Processing,
                OrderStatus::Shipped,
                OrderStatus::Pending,
                OrderStatus::Delivered,
                OrderStatus::Cancelled,
            ]
        );
    }

    #[test]
    fn vehicles_follow_shipment_ids() {
        assert_eq!(shipments()[4].vehicle, "TRK-005");
    }
}
