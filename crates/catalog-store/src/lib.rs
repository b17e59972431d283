//! Ownership of fetched collections.
//!
//! A [`CollectionStore`] holds the last successfully fetched collection for
//! one resource and hands out shared read access. Refreshes are ticketed:
//! the fetch itself happens elsewhere (any async fetch layer), and the
//! completed result is applied back through the ticket, which is how stale
//! in-flight results get discarded by issue order.

pub mod error;
pub mod status;
pub mod store;

pub use error::{FetchError, Result};
pub use status::{StatusKind, StatusMessage};
pub use store::{CollectionStore, RefreshOutcome, RefreshTicket};
