//! Business logic use cases.
//!
//! One struct per decision the user or system can make: listing the
//! persisted favorites for the favorites page, and querying the remote
//! metadata source for the home grid.

pub mod list_favorites;
pub mod search_books;

pub use list_favorites::ListFavorites;
pub use search_books::SearchBooks;
