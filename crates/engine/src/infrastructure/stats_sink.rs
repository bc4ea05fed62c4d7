//! Session-end hook that writes finalized stats to the log.

use async_trait::async_trait;
use impostor_domain::{GameStats, SessionId};

use crate::infrastructure::ports::{SinkError, StatsSinkPort};

/// Logs every closed case. Stands in for a leaderboard store.
#[derive(Debug, Default)]
pub struct TracingStatsSink;

#[async_trait]
impl StatsSinkPort for TracingStatsSink {
    async fn record(&self, session_id: SessionId, stats: GameStats) -> Result<(), SinkError> {
        tracing::info!(
            session_id = %session_id,
            won = stats.won,
            difficulty = %stats.difficulty,
            questions_used = stats.questions_used,
            questions_available = stats.questions_available,
            suspects_interrogated = stats.suspects_interrogated,
            total_suspects = stats.total_suspects,
            evidence_discovered = stats.evidence_discovered,
            solve_time_seconds = stats.solve_time_seconds,
            accused = %stats.accused_name,
            "Case closed"
        );
        Ok(())
    }
}
