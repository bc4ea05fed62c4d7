//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in a database:
//! - `SessionStore` - open game sessions keyed by id

pub mod session;

pub use session::SessionStore;
