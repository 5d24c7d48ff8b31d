use crate::commands::{empty_message, load_detail, load_page, CmdResult, Detail, ListRequest, Listing};
use crate::error::Result;
use crate::model::OrderRecord;
use crate::route::Route;
use crate::store::DataSource;

pub async fn list<S>(source: &S, req: &ListRequest<OrderRecord>) -> Result<CmdResult>
where
    S: DataSource<Vec<OrderRecord>> + ?Sized,
{
    let (page, tiles) = load_page(source, req).await?;
    let mut result = CmdResult::for_route(Route::Orders).with_tiles(tiles);
    if let Some(msg) = empty_message(page.total, "orders") {
        result.add_message(msg);
    }
    Ok(result.with_listing(Listing::Orders(page)))
}

pub async fn detail<S>(source: &S, id: &str) -> Result<CmdResult>
where
    S: DataSource<Vec<OrderRecord>> + ?Sized,
{
    let order = load_detail(source, id).await?;
    Ok(CmdResult::for_route(Route::Orders).with_detail(Detail::Order(order)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TileValue;
    use crate::fixtures;
    use crate::model::OrderStatus;
    use crate::query::StatusFilter;
    use crate::sort::{OrderSort, SortOrder};
    use crate::store::memory::InMemorySource;
    use std::num::NonZeroUsize;

    fn request(page_size: usize) -> ListRequest<OrderRecord> {
        ListRequest::new(NonZeroUsize::new(page_size).unwrap())
    }

    fn page_of(result: &CmdResult) -> &crate::paginate::Page<OrderRecord> {
        match &result.listing {
            Some(Listing::Orders(page)) => page,
            other => panic!("expected orders listing, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delivered_filter_lists_one_order() {
        let source = InMemorySource::new(fixtures::orders());
        let req = request(10).status(StatusFilter::Only(OrderStatus::Delivered));
        let result = list(&source, &req).await.unwrap();
        let page = page_of(&result);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "ORD004");
    }

    #[tokio::test]
    async fn tiles_sum_order_value() {
        let source = InMemorySource::new(fixtures::orders());
        let result = list(&source, &request(10).search("tech")).await.unwrap();
        assert_eq!(result.tiles[2].title, "Total Value");
        assert_eq!(result.tiles[2].value, TileValue::Money(702_000.0));
    }

    #[tokio::test]
    async fn second_page_of_sorted_orders() {
        let source = InMemorySource::new(fixtures::orders());
        let req = request(2)
            .sort(Some(SortOrder::ascending(OrderSort::Quantity)))
            .page(1);
        let result = list(&source, &req).await.unwrap();
        let page = page_of(&result);
        let ids: Vec<&str> = page.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD002", "ORD003"]);
        assert_eq!(page.summary(), "3-4 of 5 items");
    }

    #[tokio::test]
    async fn detail_reports_progress_step() {
        let source = InMemorySource::new(fixtures::orders());
        let result = detail(&source, "ORD002").await.unwrap();
        match result.detail {
            Some(Detail::Order(order)) => assert_eq!(order.progress_step(), 2),
            other => panic!("expected order detail, got {:?}", other),
        }
    }
}
