//! # Collection views
//!
//! A [`CollectionView`] is one table screen: a [`RecordStore`] plus the
//! [`ViewState`] the user drives (search, status filter, sort, page,
//! selection). Each view owns its own state; two views over the same dataset
//! share nothing.
//!
//! Reading a view always runs the same pipeline over the store:
//!
//! ```text
//! records ─▶ filter(query) ─▶ sort(order) ─▶ paginate(page_index)
//!    │
//!    └─────▶ tiles()          (always the unfiltered records)
//! ```
//!
//! Changing the search text or the status filter to a *different* value sends
//! the view back to the first page. Re-applying the same value, or changing
//! the sort, keeps the current page.

use crate::aggregate::{Summary, Tile};
use crate::error::{DashError, Result};
use crate::model::Record;
use crate::paginate::{paginate, Page};
use crate::query::{filter, Query, StatusFilter};
use crate::record_store::RecordStore;
use crate::sort::{sort_records, SortOrder};
use crate::store::DataSource;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<S, K> {
    query: Query<S>,
    sort: Option<SortOrder<K>>,
    page_index: usize,
    selected: Option<String>,
}

impl<S, K> Default for ViewState<S, K> {
    fn default() -> Self {
        Self {
            query: Query::default(),
            sort: None,
            page_index: 0,
            selected: None,
        }
    }
}

impl<S: PartialEq, K> ViewState<S, K> {
    pub fn query(&self) -> &Query<S> {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortOrder<K>> {
        self.sort.as_ref()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.query.search_text {
            self.query.search_text = text;
            self.page_index = 0;
        }
    }

    pub fn set_status_filter(&mut self, status: StatusFilter<S>) {
        if status != self.query.status {
            self.query.status = status;
            self.page_index = 0;
        }
    }

    pub fn set_sort(&mut self, sort: Option<SortOrder<K>>) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }
}

/// A record table with its own store and state.
#[derive(Debug, Clone)]
pub struct CollectionView<R: Record> {
    store: RecordStore<R>,
    state: ViewState<R::Status, R::SortKey>,
    page_size: NonZeroUsize,
}

impl<R: Record> CollectionView<R> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            store: RecordStore::pending(),
            state: ViewState::default(),
            page_size,
        }
    }

    /// A view over records already in hand.
    pub fn with_records(records: Vec<R>, page_size: NonZeroUsize) -> Result<Self> {
        Ok(Self {
            store: RecordStore::from_records(records)?,
            state: ViewState::default(),
            page_size,
        })
    }

    /// Run the one load for this view.
    pub async fn mount<S>(&mut self, source: &S) -> Result<()>
    where
        S: DataSource<Vec<R>> + ?Sized,
    {
        self.store.load(source).await
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn state(&self) -> &ViewState<R::Status, R::SortKey> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState<R::Status, R::SortKey> {
        &mut self.state
    }

    /// Records matching the query, sorted if a sort is set.
    pub fn filtered(&self) -> Vec<&R> {
        let mut rows = filter(self.store.records(), &self.state.query);
        if let Some(order) = self.state.sort {
            sort_records(&mut rows, order);
        }
        rows
    }

    pub fn page(&self) -> Page<&R> {
        paginate(&self.filtered(), self.page_size, self.state.page_index)
    }

    /// Open the detail pane for `key`.
    pub fn select(&mut self, key: &str) -> Result<&R> {
        let record = self
            .store
            .get(key)
            .ok_or_else(|| DashError::RecordNotFound(key.to_string()))?;
        self.state.selected = Some(key.to_string());
        Ok(record)
    }

    pub fn selected(&self) -> Option<&R> {
        self.state
            .selected
            .as_deref()
            .and_then(|key| self.store.get(key))
    }
}

impl<R: Summary> CollectionView<R> {
    /// Summary tiles over the whole store, flagged while loading.
    pub fn tiles(&self) -> Vec<Tile> {
        let tiles = R::tiles(self.store.records());
        if self.is_loading() {
            tiles.into_iter().map(Tile::loading).collect()
        } else {
            tiles
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TileValue;
    use crate::fixtures;
    use crate::model::{OrderRecord, OrderStatus, ShipmentRecord, ShipmentStatus};
    use crate::sort::{OrderSort, ShipmentSort};
    use crate::store::memory::InMemorySource;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn orders_view(page_size: usize) -> CollectionView<OrderRecord> {
        CollectionView::with_records(fixtures::orders(), size(page_size)).unwrap()
    }

    #[test]
    fn pending_view_is_empty_with_loading_tiles() {
        let view: CollectionView<ShipmentRecord> = CollectionView::new(size(10));
        assert!(view.filtered().is_empty());
        let tiles = view.tiles();
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| t.loading));
        assert!(tiles.iter().all(|t| t.value == TileValue::Count(0)));
    }

    #[tokio::test]
    async fn mount_loads_once() {
        let source = InMemorySource::new(fixtures::shipments());
        let mut view = CollectionView::new(size(10));
        view.mount(&source).await.unwrap();
        assert_eq!(source.load_count(), 1);
        assert_eq!(view.page().items.len(), 5);
        assert!(!view.tiles()[0].loading);
    }

    #[test]
    fn five_records_at_page_size_five_fit_one_page() {
        let view = orders_view(5);
        let page = view.page();
        assert_eq!(page.page_count, 1);
        assert_eq!(page.number, 1);
        let ids: Vec<&str> = page.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD001", "ORD002", "ORD003", "ORD004", "ORD005"]);
    }

    #[test]
    fn tiles_ignore_the_filter() {
        let mut view = orders_view(10);
        view.state_mut().set_search("tech");
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(view.tiles()[0].value, TileValue::Count(5));
    }

    #[test]
    fn changing_search_resets_page() {
        let mut view = orders_view(2);
        view.state_mut().set_page(2);
        view.state_mut().set_search("o");
        assert_eq!(view.state().page_index(), 0);
    }

    #[test]
    fn same_search_keeps_page() {
        let mut view = orders_view(2);
        view.state_mut().set_search("o");
        view.state_mut().set_page(1);
        view.state_mut().set_search("o");
        assert_eq!(view.state().page_index(), 1);
    }

    #[test]
    fn status_change_resets_page_but_sort_does_not() {
        let mut view = orders_view(2);
        view.state_mut().set_page(2);
        view.state_mut().set_sort(Some(SortOrder::descending(OrderSort::Value)));
        assert_eq!(view.state().page_index(), 2);

        view.state_mut().set_status_filter(StatusFilter::All);
        assert_eq!(view.state().page_index(), 2);

        view.state_mut()
            .set_status_filter(StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(view.state().page_index(), 0);
    }

    #[test]
    fn sort_applies_before_pagination() {
        let mut view = orders_view(2);
        view.state_mut()
            .set_sort(Some(SortOrder::descending(OrderSort::Value)));
        let page = view.page();
        let ids: Vec<&str> = page.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD004", "ORD003"]);
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn page_past_the_end_shows_last_page() {
        let mut view = orders_view(2);
        view.state_mut().set_page(10);
        let page = view.page();
        assert_eq!(page.number, 3);
        assert_eq!(page.items[0].id, "ORD005");
    }

    #[test]
    fn filter_and_sort_on_shipments() {
        let mut view =
            CollectionView::with_records(fixtures::shipments(), size(10)).unwrap();
        view.state_mut()
            .set_status_filter(StatusFilter::Only(ShipmentStatus::InTransit));
        view.state_mut()
            .set_sort(Some(SortOrder::ascending(ShipmentSort::EstimatedDelivery)));
        let ids: Vec<&str> = view.filtered().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["SH001", "SH004"]);
    }

    #[test]
    fn select_opens_detail() {
        let mut view = orders_view(10);
        assert_eq!(view.select("ORD002").unwrap().customer, "XYZ Industries");
        assert_eq!(view.selected().unwrap().id, "ORD002");
        assert_eq!(view.state().selected_key(), Some("ORD002"));
    }

    #[test]
    fn select_unknown_key_fails() {
        let mut view = orders_view(10);
        let err = view.select("ORD999").unwrap_err();
        assert!(matches!(err, DashError::RecordNotFound(_)));
        assert!(view.selected().is_none());
    }
}
