use crate::commands::{empty_message, load_detail, load_page, CmdResult, Detail, ListRequest, Listing};
use crate::error::Result;
use crate::model::ShipmentRecord;
use crate::route::Route;
use crate::store::DataSource;

pub async fn list<S>(source: &S, req: &ListRequest<ShipmentRecord>) -> Result<CmdResult>
where
    S: DataSource<Vec<ShipmentRecord>> + ?Sized,
{
    let (page, tiles) = load_page(source, req).await?;
    let mut result = CmdResult::for_route(Route::Shipments).with_tiles(tiles);
    if let Some(msg) = empty_message(page.total, "shipments") {
        result.add_message(msg);
    }
    Ok(result.with_listing(Listing::Shipments(page)))
}

pub async fn detail<S>(source: &S, id: &str) -> Result<CmdResult>
where
    S: DataSource<Vec<ShipmentRecord>> + ?Sized,
{
    let shipment = load_detail(source, id).await?;
    Ok(CmdResult::for_route(Route::Shipments).with_detail(Detail::Shipment(shipment)))
}
