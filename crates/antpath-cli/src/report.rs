//! Run report written at the end of a run

use antpath_common::PointId;
use antpath_engine::{ColonyConfig, ColonyOutcome, GenerationSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a caller needs to present a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub config: ColonyConfig,
    pub best_path: Vec<PointId>,
    pub best_length: f64,
    /// Per-hop cost breakdown of the best path
    pub hop_costs: Vec<f64>,
    pub generations: Vec<GenerationSummary>,
}

impl RunReport {
    pub fn new(
        run_id: Uuid,
        started_at: DateTime<Utc>,
        config: ColonyConfig,
        outcome: ColonyOutcome,
    ) -> Self {
        Self {
            run_id,
            started_at,
            finished_at: Utc::now(),
            config,
            best_path: outcome.best_path,
            best_length: outcome.best_length,
            hop_costs: outcome.hop_costs,
            generations: outcome.generations,
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }

    /// Best path as `start -> ... -> finish`
    pub fn path_display(&self) -> String {
        self.best_path
            .iter()
            .map(PointId::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_path_ids() {
        let outcome = ColonyOutcome {
            best_path: vec![PointId::start(), "7".into(), PointId::finish()],
            best_length: 4.0,
            hop_costs: vec![3.0, 1.0],
            generations: vec![],
        };
        let report = RunReport::new(Uuid::now_v7(), Utc::now(), ColonyConfig::default(), outcome);

        assert_eq!(report.path_display(), "start -> 7 -> finish");
        assert!(report.elapsed_ms() >= 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best_path"][1], "7");
        assert_eq!(json["best_length"], 4.0);
        assert_eq!(json["hop_costs"], serde_json::json!([3.0, 1.0]));
    }
}
