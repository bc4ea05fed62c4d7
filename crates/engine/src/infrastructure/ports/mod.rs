//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Suspect dialogue (could swap Gemini -> another model)
//! - Session-end stats (could swap logging -> a leaderboard store)
//! - Clock/Random (for testing)

mod error;
mod external;
mod testing;

pub use error::{LlmError, SinkError};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, FinishReason, LlmPort, LlmRequest, LlmResponse, MessageRole, StatsSinkPort,
    TokenUsage,
};

#[cfg(test)]
pub use external::MockStatsSinkPort;

// =============================================================================
// Testability Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use testing::MockClockPort;
