use clap::{Args, Parser, Subcommand};
use logitrack::metrics::TimeRange;
use logitrack::model::{DeliveryStage, OrderStatus, ShipmentStatus, UserStatus};
use logitrack::query::StatusFilter;
use logitrack::route::Route;
use logitrack::sort::{OrderSort, RecentOrderSort, ShipmentSort, UserSort};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logitrack", bin_name = "logitrack", version)]
#[command(about = "Logistics operations dashboard for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (default: $LOGITRACK_HOME, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Read datasets from JSON files in DIR instead of the built-in fixtures
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Simulated load delay for every dataset, in milliseconds
    #[arg(long, global = true, value_name = "MS", help_heading = "Options")]
    pub delay_ms: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, help_heading = "Options")]
    pub json_logs: bool,
}

/// Table controls shared by every list command.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Case-insensitive search text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    pub page: NonZeroUsize,

    /// Rows per page (default: the page-size config key)
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,
}

impl TableArgs {
    /// The 0-based page index.
    pub fn page_index(&self) -> usize {
        self.page.get() - 1
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stats, fleet status, shipment trends and recent orders
    #[command(alias = "d", display_order = 1)]
    Dashboard {
        #[command(flatten)]
        table: TableArgs,

        /// Recent orders stage: "all" or a label such as "In Transit"
        #[arg(long, default_value = "all")]
        status: StatusFilter<DeliveryStage>,

        /// Sort recent orders by: id, value, delivery
        #[arg(long)]
        sort: Option<RecentOrderSort>,

        /// Render after MS milliseconds, leaving slower panels loading
        #[arg(long, value_name = "MS")]
        deadline_ms: Option<u64>,
    },

    /// List shipments
    #[command(alias = "s", display_order = 2)]
    Shipments {
        #[command(flatten)]
        table: TableArgs,

        /// Status: "all" or a label such as "In Transit"
        #[arg(long, default_value = "all")]
        status: StatusFilter<ShipmentStatus>,

        /// Sort by: id, delivery
        #[arg(long)]
        sort: Option<ShipmentSort>,
    },

    /// Show one shipment
    #[command(display_order = 3)]
    Shipment {
        /// Shipment id (e.g. SH001)
        id: String,
    },

    /// List orders
    #[command(alias = "o", display_order = 4)]
    Orders {
        #[command(flatten)]
        table: TableArgs,

        /// Status: "all" or a label such as "Delivered"
        #[arg(long, default_value = "all")]
        status: StatusFilter<OrderStatus>,

        /// Sort by: id, quantity, value, date
        #[arg(long)]
        sort: Option<OrderSort>,
    },

    /// Show one order and its progress
    #[command(display_order = 5)]
    Order {
        /// Order id (e.g. ORD001)
        id: String,
    },

    /// Revenue, status breakdown, top routes and performance
    #[command(alias = "a", display_order = 6)]
    Analytics {
        /// Time range: 1month, 3months, 6months, 1year
        #[arg(long, default_value = "6months")]
        range: TimeRange,
    },

    /// Account profile, notifications and team members
    #[command(display_order = 7)]
    Settings {
        #[command(flatten)]
        table: TableArgs,

        /// Team member status: "all", "Active" or "Inactive"
        #[arg(long, default_value = "all")]
        status: StatusFilter<UserStatus>,

        /// Sort by: name
        #[arg(long)]
        sort: Option<UserSort>,
    },

    /// Open a screen by path or name (e.g. /orders, analytics)
    #[command(display_order = 8)]
    Open {
        route: Route,
    },

    /// List the navigation routes
    #[command(display_order = 9)]
    Routes,

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g. page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
