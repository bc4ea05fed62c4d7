//! Aggregate roots - domain objects that own their related data
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Factory pattern | `::new()` / `::open()` |
//! | Domain Events | Return values from mutations (`TurnOutcome`, `GameStats`) |

pub mod session;

pub use session::{CaseFile, EvidenceNotice, GamePhase, GameSession, TurnOutcome, NOTICE_WINDOW_MS};
