//! Session module - debounced filter state scoped to one dashboard session.

mod filter_session;

pub use filter_session::FilterSession;
