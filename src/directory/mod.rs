//! The in-memory name directory and its refresh lifecycle.
//!
//! The directory is an export of every known person, one record per display
//! name. It is loaded into an immutable [`DirectorySnapshot`], published
//! through a [`DirectoryHandle`] and replaced wholesale on every refresh.
//!
//! ## Corpus format
//!
//! ```json
//! [
//!   {"name_cleaned": "john smith", "name": "John Smith"},
//!   {"name_cleaned": "john smith", "name": "J. Smith"},
//!   {"name": "Ada Lovelace - Mathematician"}
//! ]
//! ```
//!
//! Records without `name_cleaned` get a canonical key derived from `name`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use name_resolver::directory::{spawn_refresher, DirectoryHandle, FileLoader};
//!
//! # async fn demo() {
//! let handle = Arc::new(DirectoryHandle::new());
//! let loader = Arc::new(FileLoader::new("all_nodes.json"));
//! spawn_refresher(Arc::clone(&handle), loader, Duration::from_secs(60));
//!
//! let names = handle.search("jon smth", 10, 40.0);
//! # }
//! ```

pub mod handle;
pub mod loader;
pub mod refresh;
pub mod snapshot;

pub use handle::DirectoryHandle;
pub use loader::{CorpusLoader, FileLoader};
pub use refresh::{spawn_refresher, DEFAULT_REFRESH_INTERVAL};
pub use snapshot::{DirectoryEntry, DirectoryError, DirectorySnapshot};
