//! Per-view table state and pagination.
//!
//! Each list view keeps its search text, filters, and paging position in
//! the store under `table_state_<namespace>`, so the view comes back the
//! way the user left it.

pub mod pagination;
pub mod state;

pub use pagination::{paginate, Page};
pub use state::{TableState, TableView, DEFAULT_PAGE_SIZE};
