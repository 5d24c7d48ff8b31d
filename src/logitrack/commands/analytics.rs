use crate::commands::{AnalyticsData, CmdMessage, CmdResult};
use crate::error::Result;
use crate::metrics::{AnalyticsReport, Standing, TimeRange};
use crate::route::Route;
use crate::store::DataSource;

/// The analytics report. The range is echoed back; the figures do not depend
/// on it.
pub async fn run<S>(source: &S, range: TimeRange) -> Result<CmdResult>
where
    S: DataSource<AnalyticsReport> + ?Sized,
{
    let report = source.load().await?;
    let mut result = CmdResult::for_route(Route::Analytics).with_tiles(report.overview.tiles());

    let behind: Vec<&str> = report
        .performance
        .iter()
        .filter(|m| m.standing() == Standing::Behind)
        .map(|m| m.metric.as_str())
        .collect();
    if !behind.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Behind target: {}",
            behind.join(", ")
        )));
    }

    result.analytics = Some(AnalyticsData { range, report });
    Ok(result)
}
