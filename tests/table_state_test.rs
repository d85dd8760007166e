//! Integration tests for table view state and pagination.

use dockhand::store::KeyedStore;
use dockhand::table::{paginate, TableView};
use tempfile::TempDir;

#[test]
fn view_state_round_trips_through_store() {
    let temp = TempDir::new().unwrap();
    let store = KeyedStore::open(temp.path());

    {
        let mut view = TableView::load(&store, "dockets");
        view.set_search("acme");
        view.set_filter("status", "delivered");
        view.set_page_size(25);
        view.set_page(3);
    }

    let reopened = KeyedStore::open(temp.path());
    let view = TableView::load(&reopened, "dockets");
    assert_eq!(view.search(), "acme");
    assert_eq!(view.filters().get("status").map(String::as_str), Some("delivered"));
    assert_eq!(view.page_size(), 25);
    assert_eq!(view.page(), 3);
}

#[test]
fn search_on_deep_page_goes_back_to_first() {
    let temp = TempDir::new().unwrap();
    let store = KeyedStore::open(temp.path());
    let mut view = TableView::load(&store, "pickups");

    view.set_page(5);
    view.set_search("abc");

    assert_eq!(view.page(), 1);
}

#[test]
fn paging_through_a_collection() {
    let items: Vec<String> = (0..25).map(|i| format!("D-{}", i)).collect();

    let temp = TempDir::new().unwrap();
    let store = KeyedStore::open(temp.path());
    let mut view = TableView::load(&store, "dockets");
    view.set_page(2);

    let page = paginate(&items, view.page(), view.page_size());
    assert_eq!(page.items.first().map(String::as_str), Some("D-10"));
    assert_eq!(page.items.last().map(String::as_str), Some("D-19"));
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 25);
}

#[test]
fn changing_page_size_recovers_out_of_range_position() {
    let items: Vec<u32> = (0..30).collect();

    let temp = TempDir::new().unwrap();
    let store = KeyedStore::open(temp.path());
    let mut view = TableView::load(&store, "stock");

    view.set_page(3);
    assert!(!paginate(&items, view.page(), view.page_size()).items.is_empty());

    // Larger page size resets to page 1, so the slice stays valid.
    view.set_page_size(50);
    let page = paginate(&items, view.page(), view.page_size());
    assert_eq!(page.items.len(), 30);
    assert_eq!(page.total_pages, 1);
}
