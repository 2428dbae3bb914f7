//!
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let status = fearquery::query("192.0.2.10", 27888, Duration::from_secs(2)).await;
//!     if status.online {
//!         println!("{status}");
//!     } else {
//!         eprintln!("offline: {}", status.error);
//!     }
//! }
//! ```
//!
//! The server is asked twice on one socket: a details exchange for the
//! key/value status block, then (only when players are reported) a roster
//! exchange for the per-player records. A server that never answers the
//! first exchange is reported offline; a server that only answers the first
//! is reported online with an empty roster.

pub mod client;
pub mod error;
pub mod protocol;
pub mod status;
pub mod transport;

pub use client::query;
pub use error::QueryError;
pub use status::{PlayerRecord, ServerStatus};
