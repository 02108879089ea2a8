//! Client-side data layer: cache keys, the shared query cache and the
//! paginated listing query built on top of them.

pub mod cache;
pub mod key;
pub mod listing;

pub use cache::QueryCache;
pub use key::{QueryKey, QueryScope};
pub use listing::{ListingOptions, ListingQuery, ListingSnapshot, RefreshOutcome};
