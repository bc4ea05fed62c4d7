//! Impostor engine library.
//!
//! Hosts interrogation-game sessions behind an HTTP API.
//!
//! ## Structure
//!
//! - `stores/` - In-memory session store
//! - `use_cases/` - User story orchestration over the session aggregate
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
