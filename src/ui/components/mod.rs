//! UI Components
//!
//! Reusable GTK4 widgets for the shortcut catalog browser.
//!
//! # Components
//!
//! - `record_list.rs` - Scrollable page of shortcuts with per-row copy
//! - `search_bar.rs` - Real-time search/filter
//! - `category_filter.rs` - Language dropdown
//! - `pagination_bar.rs` - Previous/next navigation + result count
//! - `toast.rs` - Transient notification area

mod category_filter;
mod pagination_bar;
mod record_list;
mod search_bar;
mod toast;

pub use category_filter::CategoryDropdown;
pub use pagination_bar::PaginationBar;
pub use record_list::RecordList;
pub use search_bar::SearchBar;
pub use toast::ToastArea;
