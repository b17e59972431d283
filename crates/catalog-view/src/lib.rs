//! Pure view derivation over fetched catalog collections.
//!
//! Everything in this crate is a synchronous, total function of its inputs:
//! filtering, paging, per-group reveal windows, and aggregate statistics.
//! Nothing here performs I/O or owns a collection; `catalog-store` does the
//! owning, this crate does the deriving.

pub mod aggregate;
pub mod browse;
pub mod filter;
pub mod paginate;

pub use aggregate::{AggregateSnapshot, GroupCount, RankKey, aggregate, rate, top_n};
pub use browse::BrowseState;
pub use filter::{FilterMemo, apply, matches};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, RevealWindow, page, reveal};
