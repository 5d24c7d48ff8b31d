//! # Rendering Module
//!
//! Styled terminal output through minijinja templates and the `style` filter
//! backed by [`DASH_THEME`].
//!
//! ## Design Philosophy
//!
//! Layout (column widths, truncation, padding, number formatting) stays in
//! Rust because it needs Unicode-aware measuring. Templates handle placement
//! and pick up the style name each piece of data carries. Every screen is
//! flattened into one [`PageView`]: summary tiles followed by titled sections,
//! each holding label/value lines, a table, or a loading marker.

use super::styles::{names, tone_style, DASH_THEME};
use super::templates;
use chrono::NaiveDate;
use console::Term;
use logitrack::aggregate::{Change, Tile, TileValue, Trend};
use logitrack::api::{CmdMessage, Detail, Listing, MessageLevel};
use logitrack::commands::{AnalyticsData, CmdResult, DashboardData};
use logitrack::config::DashConfig;
use logitrack::metrics::{AccountSettings, FleetOverview, ShipmentTrend, Standing};
use logitrack::model::{OrderRecord, OrderStatus, RecordStatus, ShipmentRecord};
use logitrack::paginate::Page;
use logitrack::route::{Route, BRAND};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Widest a table cell may get before it is truncated.
pub const MAX_CELL_WIDTH: usize = 28;
pub const BAR_WIDTH: usize = 10;
pub const LOADING_VALUE: &str = "…";

#[derive(Serialize)]
struct HeaderData {
    brand: &'static str,
    title: &'static str,
    heading: &'static str,
    subtitle: &'static str,
}

#[derive(Serialize)]
struct TileView {
    title: String,
    gap: String,
    value: String,
    value_style: &'static str,
    change: Option<String>,
    change_style: &'static str,
}

#[derive(Serialize)]
struct CellView {
    text: String,
    style: &'static str,
    sep: &'static str,
}

#[derive(Serialize)]
struct TableView {
    header: String,
    rows: Vec<Vec<CellView>>,
    note: Option<String>,
}

#[derive(Serialize)]
struct LineView {
    label: String,
    gap: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct SectionView {
    title: String,
    loading: bool,
    lines: Vec<LineView>,
    table: Option<TableView>,
}

impl SectionView {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            loading: false,
            lines: Vec::new(),
            table: None,
        }
    }

    fn loading(title: impl Into<String>) -> Self {
        Self {
            loading: true,
            ..Self::new(title)
        }
    }

    fn with_lines(mut self, lines: Vec<(String, String, &'static str)>) -> Self {
        self.lines = line_views(lines, "  ");
        self
    }

    fn with_table(mut self, table: TableView) -> Self {
        self.table = Some(table);
        self
    }
}

#[derive(Serialize)]
struct PageView {
    tiles: Vec<TileView>,
    sections: Vec<SectionView>,
}

impl PageView {
    fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.sections.is_empty()
    }
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Template environment with the `style` filter bound to one color choice.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// `None` detects color support on stdout.
    pub fn new(use_color: Option<bool>) -> Self {
        let use_color =
            use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let theme = DASH_THEME.clone();
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            if use_color {
                theme.apply(&name, &text)
            } else {
                theme.apply_plain(&name, &text)
            }
        });

        for (name, source) in templates::ALL {
            if let Err(e) = env.add_template(name, source) {
                tracing::error!(template = name, error = %e, "template failed to compile");
            }
        }
        Self { env }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn header(&self, route: Route) -> String {
        let data = HeaderData {
            brand: BRAND,
            title: route.title(),
            heading: route.heading(),
            subtitle: route.subtitle(),
        };
        self.render("header", &data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: match msg.level {
                        MessageLevel::Info => names::INFO,
                        MessageLevel::Success => names::SUCCESS,
                        MessageLevel::Warning => names::WARNING,
                        MessageLevel::Error => names::ERROR,
                    },
                })
                .collect(),
        };
        let mut out = self.render("messages", &data);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    /// The whole screen for one command: header, page body, then messages.
    pub fn result(&self, result: &CmdResult) -> String {
        let mut blocks = Vec::new();
        if let Some(route) = result.route {
            blocks.push(self.header(route));
        }
        let page = page_view(result);
        if !page.is_empty() {
            blocks.push(self.render("page", &page));
        }
        let messages = self.messages(&result.messages);
        if !messages.is_empty() {
            blocks.push(messages);
        }

        let mut out = String::new();
        for block in blocks {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&block);
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

fn page_view(result: &CmdResult) -> PageView {
    let mut sections = Vec::new();

    if let Some(detail) = &result.detail {
        sections.extend(match detail {
            Detail::Shipment(shipment) => shipment_sections(shipment),
            Detail::Order(order) => order_sections(order),
        });
    }
    if let Some(account) = &result.account {
        sections.extend(account_sections(account));
    }
    if let Some(analytics) = &result.analytics {
        sections.extend(analytics_sections(analytics));
    }
    if let Some(dashboard) = &result.dashboard {
        sections.push(fleet_section(dashboard.fleet.as_ref()));
        sections.push(trend_section(dashboard.trend.as_ref()));
    }
    if let Some(listing) = &result.listing {
        sections.push(listing_section(listing, result.dashboard.as_ref()));
    }
    if let Some(config) = &result.config {
        sections.push(config_section(config));
    }
    if !result.routes.is_empty() {
        sections.push(routes_section(&result.routes));
    }

    PageView {
        tiles: tile_views(&result.tiles),
        sections,
    }
}

fn tile_views(tiles: &[Tile]) -> Vec<TileView> {
    let widest = tiles.iter().map(|t| t.title.width()).max().unwrap_or(0);
    tiles
        .iter()
        .map(|tile| {
            let gap = " ".repeat(widest - tile.title.width() + 2);
            if tile.loading {
                return TileView {
                    title: tile.title.clone(),
                    gap,
                    value: LOADING_VALUE.to_string(),
                    value_style: names::LOADING,
                    change: None,
                    change_style: names::MUTED,
                };
            }
            let (change, change_style) = match tile.change {
                Some(change) => {
                    let (text, style) = format_change(change);
                    (Some(text), style)
                }
                None => (None, names::MUTED),
            };
            TileView {
                title: tile.title.clone(),
                gap,
                value: format_tile_value(tile.value),
                value_style: names::TILE_VALUE,
                change,
                change_style,
            }
        })
        .collect()
}

fn listing_section(listing: &Listing, dashboard: Option<&DashboardData>) -> SectionView {
    match listing {
        Listing::Shipments(page) => SectionView::new("All Shipments").with_table(table(
            &[
                col("ID"),
                col("Route"),
                col("Status"),
                col("Driver"),
                col("Vehicle"),
                col("ETA"),
                right("Progress"),
            ],
            page.items
                .iter()
                .map(|s| {
                    vec![
                        (s.id.clone(), names::KEY),
                        (format!("{} → {}", s.origin, s.destination), names::PLAIN),
                        (s.status.to_string(), tone_style(s.status.tone())),
                        (s.driver.clone(), names::PLAIN),
                        (s.vehicle.clone(), names::MUTED),
                        (format_date(s.estimated_delivery), names::PLAIN),
                        (format!("{}%", s.progress), names::PLAIN),
                    ]
                })
                .collect(),
            Some(page_note(page)),
        )),
        Listing::Orders(page) => SectionView::new("All Orders").with_table(table(
            &[
                col("Order ID"),
                col("Customer"),
                col("Product"),
                right("Qty"),
                right("Value"),
                col("Status"),
                col("Priority"),
                col("Order Date"),
            ],
            page.items
                .iter()
                .map(|o| {
                    vec![
                        (o.id.clone(), names::KEY),
                        (o.customer.clone(), names::PLAIN),
                        (o.product.clone(), names::PLAIN),
                        (format_count(u64::from(o.quantity)), names::PLAIN),
                        (format_money(o.value), names::PLAIN),
                        (o.status.to_string(), tone_style(o.status.tone())),
                        (o.priority.to_string(), tone_style(o.priority.tone())),
                        (format_date(o.order_date), names::PLAIN),
                    ]
                })
                .collect(),
            Some(page_note(page)),
        )),
        Listing::Users(page) => SectionView::new("Team Members").with_table(table(
            &[col("Name"), col("Email"), col("Role"), col("Status")],
            page.items
                .iter()
                .map(|u| {
                    vec![
                        (u.name.clone(), names::PLAIN),
                        (u.email.clone(), names::MUTED),
                        (u.role.to_string(), names::PLAIN),
                        (u.status.to_string(), tone_style(u.status.tone())),
                    ]
                })
                .collect(),
            Some(page_note(page)),
        )),
        Listing::RecentOrders(page) => {
            let recent_tiles = dashboard.map(|d| d.recent_tiles.as_slice()).unwrap_or(&[]);
            if recent_tiles.iter().any(|t| t.loading) {
                return SectionView::loading("Recent Orders");
            }
            SectionView::new("Recent Orders")
                .with_lines(
                    recent_tiles
                        .iter()
                        .map(|t| (t.title.clone(), format_tile_value(t.value), names::TILE_VALUE))
                        .collect(),
                )
                .with_table(table(
                    &[
                        col("Order ID"),
                        col("Customer"),
                        col("Destination"),
                        col("Status"),
                        col("Priority"),
                        right("Value"),
                        col("Delivery"),
                    ],
                    page.items
                        .iter()
                        .map(|o| {
                            vec![
                                (o.order_id.clone(), names::KEY),
                                (o.customer.clone(), names::PLAIN),
                                (o.destination.clone(), names::PLAIN),
                                (o.status.to_string(), tone_style(o.status.tone())),
                                (o.priority.to_string(), tone_style(o.priority.tone())),
                                (format_money(o.value), names::PLAIN),
                                (format_date(o.delivery_date), names::PLAIN),
                            ]
                        })
                        .collect(),
                    Some(page_note(page)),
                ))
        }
    }
}

fn page_note<T>(page: &Page<T>) -> String {
    if page.total == 0 {
        return page.summary();
    }
    format!(
        "{} · {}page {}/{}{}",
        page.summary(),
        if page.has_previous() { "‹ " } else { "" },
        page.number,
        page.page_count,
        if page.has_next() { " ›" } else { "" }
    )
}

fn shipment_sections(s: &ShipmentRecord) -> Vec<SectionView> {
    vec![SectionView::new(format!("Shipment {}", s.id)).with_lines(vec![
        ("Status".into(), s.status.to_string(), tone_style(s.status.tone())),
        ("Origin".into(), s.origin.clone(), names::PLAIN),
        ("Destination".into(), s.destination.clone(), names::PLAIN),
        ("Driver".into(), s.driver.clone(), names::PLAIN),
        ("Vehicle".into(), s.vehicle.clone(), names::PLAIN),
        ("Cargo".into(), s.cargo.clone(), names::PLAIN),
        ("Weight".into(), s.weight.clone(), names::PLAIN),
        (
            "Estimated Delivery".into(),
            format_date(s.estimated_delivery),
            names::PLAIN,
        ),
        (
            "Progress".into(),
            format!("{} {}%", bar(f64::from(s.progress)), s.progress),
            tone_style(s.status.tone()),
        ),
    ])]
}

fn order_sections(o: &OrderRecord) -> Vec<SectionView> {
    let summary = SectionView::new(format!("Order {}", o.id)).with_lines(vec![
        ("Status".into(), o.status.to_string(), tone_style(o.status.tone())),
        ("Customer".into(), o.customer.clone(), names::PLAIN),
        ("Product".into(), o.product.clone(), names::PLAIN),
        ("Quantity".into(), format_count(u64::from(o.quantity)), names::PLAIN),
        ("Value".into(), format_money(o.value), names::PLAIN),
        ("Priority".into(), o.priority.to_string(), tone_style(o.priority.tone())),
        ("Order Date".into(), format_date(o.order_date), names::PLAIN),
        ("Delivery Date".into(), format_date(o.delivery_date), names::PLAIN),
        ("Address".into(), o.address.clone(), names::PLAIN),
    ]);

    let reached = o.progress_step();
    let cancelled = o.status == OrderStatus::Cancelled;
    let track = OrderRecord::PROGRESS_TRACK
        .iter()
        .enumerate()
        .map(|(step, status)| {
            let (marker, style) = if cancelled {
                ("○", names::MUTED)
            } else if step < reached {
                ("●", names::POSITIVE)
            } else if step == reached {
                ("●", tone_style(status.tone()))
            } else {
                ("○", names::MUTED)
            };
            (status.to_string(), marker.to_string(), style)
        })
        .collect();
    let mut progress = SectionView::new("Progress").with_lines(track);
    if cancelled {
        progress.lines.push(LineView {
            label: o.status.to_string(),
            gap: "  ".into(),
            value: "✕".into(),
            style: names::CRITICAL,
        });
    }

    vec![summary, progress]
}

fn account_sections(account: &AccountSettings) -> Vec<SectionView> {
    let p = &account.profile;
    let profile = SectionView::new("Profile").with_lines(vec![
        ("Name".into(), format!("{} {}", p.first_name, p.last_name), names::PLAIN),
        ("Email".into(), p.email.clone(), names::PLAIN),
        ("Phone".into(), p.phone.clone(), names::PLAIN),
        ("Position".into(), p.position.clone(), names::PLAIN),
        ("Department".into(), p.department.clone(), names::PLAIN),
        ("Timezone".into(), p.timezone.clone(), names::PLAIN),
    ]);
    let notifications = SectionView::new("Notifications").with_lines(
        account
            .notifications
            .entries()
            .into_iter()
            .map(|(label, enabled)| {
                let (value, style) = if enabled {
                    ("On", names::POSITIVE)
                } else {
                    ("Off", names::MUTED)
                };
                (label.to_string(), value.to_string(), style)
            })
            .collect(),
    );
    vec![profile, notifications]
}

fn analytics_sections(data: &AnalyticsData) -> Vec<SectionView> {
    let report = &data.report;
    let revenue = SectionView::new(format!("Revenue ({})", data.range)).with_table(table(
        &[col("Month"), right("Revenue"), right("Shipments")],
        report
            .revenue
            .iter()
            .map(|p| {
                vec![
                    (p.month.clone(), names::LABEL),
                    (format_money(p.revenue), names::PLAIN),
                    (format_count(u64::from(p.shipments)), names::PLAIN),
                ]
            })
            .collect(),
        None,
    ));

    let by_status = SectionView::new("Shipments by Status").with_table(table(
        &[col("Status"), right("Shipments"), right("Share")],
        report
            .shipments_by_status
            .iter()
            .zip(report.status_shares())
            .map(|(slice, (status, share))| {
                vec![
                    (status.to_string(), tone_style(status.tone())),
                    (format_count(u64::from(slice.value)), names::PLAIN),
                    (format_percent(share), names::PLAIN),
                ]
            })
            .collect(),
        None,
    ));

    let routes = SectionView::new("Top Routes").with_table(table(
        &[col("Route"), right("Shipments"), right("Revenue")],
        report
            .top_routes
            .iter()
            .map(|r| {
                vec![
                    (r.route.clone(), names::PLAIN),
                    (format_count(u64::from(r.shipments)), names::PLAIN),
                    (format_money(r.revenue), names::PLAIN),
                ]
            })
            .collect(),
        None,
    ));

    let performance = SectionView::new("Performance").with_table(table(
        &[
            col("Metric"),
            right("Value"),
            right("Target"),
            right("Attainment"),
            col("Standing"),
        ],
        report
            .performance
            .iter()
            .map(|m| {
                let (standing, style) = match m.standing() {
                    Standing::Met => ("Met", names::POSITIVE),
                    Standing::OnTrack => ("On Track", names::INFO_TONE),
                    Standing::Behind => ("Behind", names::CRITICAL),
                };
                vec![
                    (m.metric.clone(), names::PLAIN),
                    (format!("{:.1}", m.value), names::PLAIN),
                    (format!("{:.1}", m.target), names::MUTED),
                    (format_percent(m.attainment()), names::PLAIN),
                    (standing.to_string(), style),
                ]
            })
            .collect(),
        None,
    ));

    vec![revenue, by_status, routes, performance]
}

fn fleet_section(fleet: Option<&FleetOverview>) -> SectionView {
    let Some(fleet) = fleet else {
        return SectionView::loading("Fleet Status");
    };
    let mut lines: Vec<(String, String, &'static str)> = fleet
        .entries
        .iter()
        .map(|entry| {
            (
                entry.status.clone(),
                format!(
                    "{} {}/{} ({})",
                    bar(entry.share()),
                    entry.count,
                    entry.total,
                    format_percent(entry.share())
                ),
                tone_style(entry.tone),
            )
        })
        .collect();
    lines.push((
        "Fleet Efficiency".to_string(),
        format_percent(fleet.efficiency),
        names::TILE_VALUE,
    ));
    SectionView::new("Fleet Status").with_lines(lines)
}

fn trend_section(trend: Option<&ShipmentTrend>) -> SectionView {
    let Some(trend) = trend else {
        return SectionView::loading("Shipment Trends");
    };
    SectionView::new("Shipment Trends").with_table(table(
        &[
            col("Month"),
            right("Delivered"),
            right("In Transit"),
            right("Pending"),
            right("Total"),
        ],
        trend
            .months
            .iter()
            .map(|p| {
                vec![
                    (p.month.clone(), names::LABEL),
                    (format_count(u64::from(p.delivered)), names::POSITIVE),
                    (format_count(u64::from(p.in_transit)), names::INFO_TONE),
                    (format_count(u64::from(p.pending)), names::CAUTION),
                    (format_count(p.total()), names::TILE_VALUE),
                ]
            })
            .collect(),
        None,
    ))
}

fn config_section(config: &DashConfig) -> SectionView {
    let entries: Vec<(String, String, &'static str)> = config
        .entries()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value, names::PLAIN))
        .collect();
    SectionView {
        lines: line_views(entries, " = "),
        ..SectionView::new("Configuration")
    }
}

fn routes_section(routes: &[Route]) -> SectionView {
    SectionView::new("Routes").with_table(table(
        &[col("Path"), col("Title"), col("Heading")],
        routes
            .iter()
            .map(|r| {
                vec![
                    (r.path().to_string(), names::KEY),
                    (r.title().to_string(), names::PLAIN),
                    (r.heading().to_string(), names::MUTED),
                ]
            })
            .collect(),
        None,
    ))
}

/// Label/value lines with the values aligned one column after the widest
/// label, `separator` included.
fn line_views(lines: Vec<(String, String, &'static str)>, separator: &str) -> Vec<LineView> {
    let widest = lines.iter().map(|(l, _, _)| l.width()).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|(label, value, style)| LineView {
            gap: format!("{}{}", " ".repeat(widest - label.width()), separator),
            label,
            value,
            style,
        })
        .collect()
}

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

struct Column {
    title: &'static str,
    align: Align,
}

fn col(title: &'static str) -> Column {
    Column {
        title,
        align: Align::Left,
    }
}

fn right(title: &'static str) -> Column {
    Column {
        title,
        align: Align::Right,
    }
}

/// Measure every column, truncate overlong cells and pad the rest. The last
/// column is not padded when left-aligned so lines carry no trailing blanks.
fn table(
    columns: &[Column],
    rows: Vec<Vec<(String, &'static str)>>,
    note: Option<String>,
) -> TableView {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|(text, _)| text.width())
                .chain(std::iter::once(column.title.width()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();
    let last = columns.len().saturating_sub(1);

    let header = columns
        .iter()
        .enumerate()
        .map(|(i, column)| fit(column.title, widths[i], column.align, i == last))
        .collect::<Vec<_>>()
        .join("  ");

    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .take(columns.len())
                .map(|(i, (text, style))| CellView {
                    text: fit(&text, widths[i], columns[i].align, i == last),
                    style,
                    sep: if i == last { "" } else { "  " },
                })
                .collect()
        })
        .collect();

    TableView { header, rows, note }
}

fn fit(text: &str, width: usize, align: Align, last: bool) -> String {
    let text = if text.width() > width {
        truncate_to_width(text, width)
    } else {
        text.to_string()
    };
    let padding = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Right => format!("{}{}", padding, text),
        Align::Left if last => text,
        Align::Left => format!("{}{}", text, padding),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `$702,000`, or `$1,250.50` when there are cents.
fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };
    let (whole, frac) = (cents / 100, cents % 100);
    if frac == 0 {
        format!("{}${}", sign, format_count(whole))
    } else {
        format!("{}${}.{:02}", sign, format_count(whole), frac)
    }
}

fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

fn format_tile_value(value: TileValue) -> String {
    match value {
        TileValue::Count(n) => format_count(n as u64),
        TileValue::Money(amount) => format_money(amount),
        TileValue::Percent(p) => format_percent(p),
        TileValue::Measure { value, unit } => format!("{:.1} {}", value, unit),
    }
}

fn format_change(change: Change) -> (String, &'static str) {
    let arrow = match change.trend() {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Flat => "→",
    };
    let style = match change.trend() {
        Trend::Flat => names::MUTED,
        _ if change.is_favourable() => names::POSITIVE,
        _ => names::CRITICAL,
    };
    (format!("{} {:.1}%", arrow, change.percent.abs()), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logitrack::fixtures;
    use logitrack::metrics::{DashboardStats, TimeRange};
    use logitrack::paginate::paginate;
    use std::num::NonZeroUsize;

    fn plain() -> Renderer {
        Renderer::new(Some(false))
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_money(702_000.0), "$702,000");
        assert_eq!(format_money(1250.5), "$1,250.50");
        assert_eq!(format_percent(94.2), "94.2%");
    }

    #[test]
    fn change_arrows_follow_favourability() {
        assert_eq!(
            format_change(Change::higher_is_better(12.3)),
            ("↑ 12.3%".to_string(), names::POSITIVE)
        );
        assert_eq!(
            format_change(Change::higher_is_better(-2.1)),
            ("↓ 2.1%".to_string(), names::CRITICAL)
        );
        assert_eq!(
            format_change(Change::lower_is_better(-5.2)),
            ("↓ 5.2%".to_string(), names::POSITIVE)
        );
    }

    #[test]
    fn truncates_wide_cells() {
        assert_eq!(fit("abcdef", 4, Align::Left, false), "abc…");
        assert_eq!(fit("ab", 4, Align::Right, false), "  ab");
        assert_eq!(fit("ab", 4, Align::Left, true), "ab");
    }

    #[test]
    fn bar_fills_by_share() {
        assert_eq!(bar(0.0), "░".repeat(BAR_WIDTH));
        assert_eq!(bar(100.0), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(50.0).chars().filter(|c| *c == '█').count(), 5);
    }

    #[test]
    fn header_shows_route_titles() {
        let out = plain().header(Route::Dashboard);
        assert!(out.contains("LogiTrack"));
        assert!(out.contains("Dashboard Overview"));
        assert!(out.contains("Monitor shipments, fleet and orders at a glance"));
    }

    #[test]
    fn shipment_table_lists_rows_and_pager() {
        let page = paginate(&fixtures::shipments(), size(10), 0);
        let result = CmdResult::for_route(Route::Shipments)
            .with_listing(Listing::Shipments(page));
        let out = plain().result(&result);
        assert!(out.contains("All Shipments"));
        assert!(out.contains("SH001"));
        assert!(out.contains("SH005"));
        assert!(out.contains("1-5 of 5 items · page 1/1"));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn pager_marks_neighbouring_pages() {
        let orders = fixtures::orders();
        let note = |index| page_note(&paginate(&orders, size(2), index));
        assert_eq!(note(0), "1-2 of 5 items · page 1/3 ›");
        assert_eq!(note(1), "3-4 of 5 items · ‹ page 2/3 ›");
        assert_eq!(note(2), "5-5 of 5 items · ‹ page 3/3");
    }

    #[test]
    fn empty_listing_reads_zero_items() {
        let page = paginate::<logitrack::model::OrderRecord>(&[], size(10), 0);
        let result = CmdResult::for_route(Route::Orders).with_listing(Listing::Orders(page));
        let out = plain().result(&result);
        assert!(out.contains("0 items"));
    }

    #[test]
    fn tiles_show_values_and_changes() {
        let result = CmdResult::default().with_tiles(fixtures::dashboard_stats().tiles());
        let out = plain().result(&result);
        assert!(out.contains("Delivery Rate"));
        assert!(out.contains("94.2%"));
        assert!(out.contains('↑'));
    }

    #[test]
    fn pending_dashboard_panels_render_loading() {
        let mut result = CmdResult::for_route(Route::Dashboard)
            .with_tiles(DashboardStats::loading_tiles());
        result.dashboard = Some(DashboardData::default());
        let out = plain().result(&result);
        assert!(out.contains("Fleet Status"));
        assert!(out.contains("Loading…"));
        assert!(out.contains(LOADING_VALUE));
    }

    #[test]
    fn order_detail_has_progress_track() {
        let order = fixtures::orders()[0].clone();
        let result = CmdResult::for_route(Route::Orders).with_detail(Detail::Order(order));
        let out = plain().result(&result);
        assert!(out.contains("Order ORD001"));
        assert!(out.contains("Progress"));
        assert!(out.contains("Shipped"));
    }

    #[test]
    fn analytics_sections_render() {
        let mut result = CmdResult::for_route(Route::Analytics);
        result.analytics = Some(AnalyticsData {
            range: TimeRange::ThreeMonths,
            report: fixtures::analytics(),
        });
        let out = plain().result(&result);
        assert!(out.contains("Revenue (3 Months)"));
        assert!(out.contains("Top Routes"));
        assert!(out.contains("On Track"));
    }

    #[test]
    fn config_lines_use_equals() {
        let result = CmdResult::default().with_config(DashConfig::default());
        let out = plain().result(&result);
        assert!(out.contains("fetch-delay-ms"));
        assert!(out.contains(" = 500"));
    }

    #[test]
    fn messages_render_with_level_styles() {
        let out = plain().messages(&[CmdMessage::warning("careful"), CmdMessage::info("fyi")]);
        assert_eq!(out, "careful\nfyi\n");
    }
}
