use super::render::Renderer;
use super::setup::{Cli, Commands, TableArgs};
use super::telemetry::{init_tracing, level_for};
use clap::Parser;
use directories::ProjectDirs;
use logitrack::api::{ConfigAction, DashApi};
use logitrack::commands::{CmdResult, ListRequest};
use logitrack::config::DashConfig;
use logitrack::error::{DashError, Result};
use logitrack::metrics::TimeRange;
use logitrack::model::{
    DeliveryStage, OrderRecord, RecentOrderRecord, Record, ShipmentRecord, UserRecord,
};
use logitrack::query::StatusFilter;
use logitrack::route::Route;
use logitrack::sort::{RecentOrderSort, SortOrder};
use logitrack::store::fixture::FixtureSource;
use logitrack::store::fs::FileSource;
use logitrack::store::DashboardBackend;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Overrides the platform config directory.
pub const HOME_ENV: &str = "LOGITRACK_HOME";

struct AppContext<S: DashboardBackend> {
    api: DashApi<S>,
    config: DashConfig,
    renderer: Renderer,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs, level_for(cli.verbose));
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_dir = resolve_config_dir(cli.config_dir.clone(), std::env::var_os(HOME_ENV))?;
    let config = DashConfig::load(&config_dir)?;
    let renderer = Renderer::new(cli.no_color.then_some(false));
    let command = cli.command.unwrap_or_else(default_command);

    match cli.data_dir.clone().or_else(|| config.data_dir.clone()) {
        Some(dir) => {
            info!(data_dir = %dir.display(), "reading datasets from files");
            let ctx = AppContext {
                api: DashApi::new(FileSource::new(dir), config_dir),
                config,
                renderer,
            };
            dispatch(&ctx, command).await
        }
        None => {
            let (records, overview) = match cli.delay_ms {
                Some(ms) => (Duration::from_millis(ms), Duration::from_millis(ms)),
                None => (config.fetch_delay(), config.overview_delay()),
            };
            let ctx = AppContext {
                api: DashApi::new(FixtureSource::new(records, overview), config_dir),
                config,
                renderer,
            };
            dispatch(&ctx, command).await
        }
    }
}

/// `--config-dir`, then `$LOGITRACK_HOME`, then the platform config dir.
fn resolve_config_dir(flag: Option<PathBuf>, home: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(home) = home.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "logitrack", "logitrack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            DashError::Config(format!(
                "could not determine a config directory; pass --config-dir or set {}",
                HOME_ENV
            ))
        })
}

fn default_command() -> Commands {
    Commands::Dashboard {
        table: TableArgs {
            search: String::new(),
            desc: false,
            page: NonZeroUsize::MIN,
            page_size: None,
        },
        status: StatusFilter::All,
        sort: None,
        deadline_ms: None,
    }
}

async fn dispatch<S: DashboardBackend>(ctx: &AppContext<S>, command: Commands) -> Result<()> {
    match command {
        Commands::Dashboard {
            table,
            status,
            sort,
            deadline_ms,
        } => handle_dashboard(ctx, &table, status, sort, deadline_ms).await,
        Commands::Shipments {
            table,
            status,
            sort,
        } => {
            let req =
                list_request::<ShipmentRecord>(&table, status, sort, ctx.config.page_size);
            print_result(ctx, &ctx.api.shipments(&req).await?)
        }
        Commands::Shipment { id } => print_result(ctx, &ctx.api.shipment(&id).await?),
        Commands::Orders {
            table,
            status,
            sort,
        } => {
            let req = list_request::<OrderRecord>(&table, status, sort, ctx.config.page_size);
            print_result(ctx, &ctx.api.orders(&req).await?)
        }
        Commands::Order { id } => print_result(ctx, &ctx.api.order(&id).await?),
        Commands::Analytics { range } => print_result(ctx, &ctx.api.analytics(range).await?),
        Commands::Settings {
            table,
            status,
            sort,
        } => {
            let req = list_request::<UserRecord>(&table, status, sort, ctx.config.page_size);
            print_result(ctx, &ctx.api.settings(&req).await?)
        }
        Commands::Open { route } => handle_open(ctx, route).await,
        Commands::Routes => print_result(ctx, &ctx.api.routes()),
        Commands::Config { key, value } => handle_config(ctx, key, value),
    }
}

async fn handle_dashboard<S: DashboardBackend>(
    ctx: &AppContext<S>,
    table: &TableArgs,
    status: StatusFilter<DeliveryStage>,
    sort: Option<RecentOrderSort>,
    deadline_ms: Option<u64>,
) -> Result<()> {
    let req = list_request::<RecentOrderRecord>(
        table,
        status,
        sort,
        ctx.config.recent_orders_page_size,
    );
    let deadline = deadline_ms.map(Duration::from_millis);
    let result = ctx.api.dashboard(&req, deadline).await?;
    print_result(ctx, &result)
}

/// Every screen with its default table state.
async fn handle_open<S: DashboardBackend>(ctx: &AppContext<S>, route: Route) -> Result<()> {
    let page_size = ctx.config.page_size;
    let result = match route {
        Route::Dashboard => {
            let recent = ListRequest::new(ctx.config.recent_orders_page_size);
            ctx.api.dashboard(&recent, None).await?
        }
        Route::Shipments => ctx.api.shipments(&ListRequest::new(page_size)).await?,
        Route::Orders => ctx.api.orders(&ListRequest::new(page_size)).await?,
        Route::Analytics => ctx.api.analytics(TimeRange::default()).await?,
        Route::Settings => ctx.api.settings(&ListRequest::new(page_size)).await?,
    };
    print_result(ctx, &result)
}

fn handle_config<S: DashboardBackend>(
    ctx: &AppContext<S>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    print_result(ctx, &result)
}

fn list_request<R: Record>(
    table: &TableArgs,
    status: StatusFilter<R::Status>,
    sort: Option<R::SortKey>,
    default_page_size: NonZeroUsize,
) -> ListRequest<R> {
    let sort = sort.map(|key| {
        if table.desc {
            SortOrder::descending(key)
        } else {
            SortOrder::ascending(key)
        }
    });
    ListRequest::new(table.page_size.unwrap_or(default_page_size))
        .search(table.search.clone())
        .status(status)
        .sort(sort)
        .page(table.page_index())
}

fn print_result<S: DashboardBackend>(ctx: &AppContext<S>, result: &CmdResult) -> Result<()> {
    print!("{}", ctx.renderer.result(result));
    Ok(())
}
