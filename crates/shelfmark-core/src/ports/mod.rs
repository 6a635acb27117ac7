//! Port interfaces between Shelfmark's domain logic and the outside world.
//!
//! Ports define the contract between the business logic and its
//! collaborators, following Hexagonal Architecture principles: the record
//! storage that holds the favorites record, the rendered controls supplied
//! by the UI layer, and the remote book metadata source. The core never
//! touches a file, a socket, or a rendered element directly.

pub mod book_search;
pub mod record_storage;
pub mod rendered_control;

pub use book_search::{BookSearchError, BookSearchPort, SearchHit, SearchPage, SearchQuery};
pub use record_storage::{RecordStorageError, RecordStoragePort};
pub use rendered_control::RenderedControlPort;
