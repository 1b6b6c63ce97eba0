//! Web server exposing the autocomplete API.
//!
//! ## Starting the Server
//!
//! ```text
//! # Serve on the default port, reloading the directory every minute
//! name-resolver serve --corpus all_nodes.json
//!
//! # Custom port and reload interval
//! name-resolver serve --corpus all_nodes.json --port 3000 --refresh-secs 300
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/autocomplete?person=<fragment>[&limit=<n>][&cutoff=<n>]` -
//!   JSON array of display names; `400` on a missing or invalid query,
//!   `503` until the first directory load succeeds
//! - `GET /api/directory` - version and size of the served directory

pub mod server;
