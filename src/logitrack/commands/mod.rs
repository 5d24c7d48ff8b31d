use crate::aggregate::{Summary, Tile};
use crate::config::DashConfig;
use crate::error::Result;
use crate::metrics::{
    AccountSettings, AnalyticsReport, DashboardStats, FleetOverview, ShipmentTrend, TimeRange,
};
use crate::model::{OrderRecord, RecentOrderRecord, Record, ShipmentRecord, UserRecord};
use crate::paginate::Page;
use crate::query::StatusFilter;
use crate::route::Route;
use crate::sort::SortOrder;
use crate::store::DataSource;
use crate::view::CollectionView;
use std::num::NonZeroUsize;

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod orders;
pub mod routes;
pub mod settings;
pub mod shipments;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A page of one of the record tables.
#[derive(Debug, Clone)]
pub enum Listing {
    Shipments(Page<ShipmentRecord>),
    Orders(Page<OrderRecord>),
    Users(Page<UserRecord>),
    RecentOrders(Page<RecentOrderRecord>),
}

impl Listing {
    pub fn total(&self) -> usize {
        match self {
            Listing::Shipments(page) => page.total,
            Listing::Orders(page) => page.total,
            Listing::Users(page) => page.total,
            Listing::RecentOrders(page) => page.total,
        }
    }
}

/// The record behind an opened detail pane.
#[derive(Debug, Clone)]
pub enum Detail {
    Shipment(ShipmentRecord),
    Order(OrderRecord),
}

/// Dashboard panels. A panel whose load had not resolved by the deadline
/// stays `None` and renders in its loading state.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub stats: Option<DashboardStats>,
    pub fleet: Option<FleetOverview>,
    pub trend: Option<ShipmentTrend>,
    pub recent_tiles: Vec<Tile>,
}

#[derive(Debug, Clone)]
pub struct AnalyticsData {
    pub range: TimeRange,
    pub report: AnalyticsReport,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub route: Option<Route>,
    pub tiles: Vec<Tile>,
    pub listing: Option<Listing>,
    pub detail: Option<Detail>,
    pub dashboard: Option<DashboardData>,
    pub analytics: Option<AnalyticsData>,
    pub account: Option<AccountSettings>,
    pub routes: Vec<Route>,
    pub config: Option<DashConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn for_route(route: Route) -> Self {
        Self {
            route: Some(route),
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_tiles(mut self, tiles: Vec<Tile>) -> Self {
        self.tiles = tiles;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_detail(mut self, detail: Detail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_config(mut self, config: DashConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// User-driven table state for one list command.
#[derive(Debug, Clone)]
pub struct ListRequest<R: Record> {
    pub search: String,
    pub status: StatusFilter<R::Status>,
    pub sort: Option<SortOrder<R::SortKey>>,
    /// 0-based page index.
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl<R: Record> ListRequest<R> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            sort: None,
            page: 0,
            page_size,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn status(mut self, status: StatusFilter<R::Status>) -> Self {
        self.status = status;
        self
    }

    pub fn sort(mut self, sort: Option<SortOrder<R::SortKey>>) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// Mount a fresh view, drive it to the requested state and read one page plus
/// the summary tiles.
pub(crate) async fn load_page<R, S>(source: &S, req: &ListRequest<R>) -> Result<(Page<R>, Vec<Tile>)>
where
    R: Summary,
    S: DataSource<Vec<R>> + ?Sized,
{
    let mut view = CollectionView::new(req.page_size);
    view.mount(source).await?;

    // Search and status first: a change to either resets the page index.
    let state = view.state_mut();
    state.set_search(req.search.clone());
    state.set_status_filter(req.status);
    state.set_sort(req.sort);
    state.set_page(req.page);

    let page = view.page().map(|record| record.clone());
    Ok((page, view.tiles()))
}

/// The page and tiles of a view whose load has not resolved.
pub(crate) fn pending_page<R: Summary>(req: &ListRequest<R>) -> (Page<R>, Vec<Tile>) {
    let view: CollectionView<R> = CollectionView::new(req.page_size);
    let page = view.page().map(|record| record.clone());
    (page, view.tiles())
}

/// Mount a fresh view and open the detail pane for `key`.
pub(crate) async fn load_detail<R, S>(source: &S, key: &str) -> Result<R>
where
    R: Record,
    S: DataSource<Vec<R>> + ?Sized,
{
    let mut view = CollectionView::new(NonZeroUsize::MIN);
    view.mount(source).await?;
    view.select(key).cloned()
}

pub(crate) fn empty_message(page_total: usize, collection: &str) -> Option<CmdMessage> {
    (page_total == 0).then(|| CmdMessage::info(format!("No {} match the current filters.", collection)))
}
