//! Score tables consumed by the engine
//!
//! - Environmental score per point, used to derive evaporation rates
//! - Ability score per actor
//! - Proficiency score per (actor, point), used to bias selection
//!
//! All scores live in `[SCORE_MIN, SCORE_MAX]`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::point::{ActorId, PointId, PointIndex};
use crate::error::{AcoError, LookupError, Result};
use crate::{SCORE_MAX, SCORE_MIN};

/// Environmental score record for one point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalScore {
    pub point: PointId,
    pub score: f64,
}

/// Ability score record for one actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorAbility {
    pub actor: ActorId,
    pub score: f64,
}

/// How well an actor handles a given point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorProficiency {
    pub actor: ActorId,
    pub point: PointId,
    pub score: f64,
}

/// Serialized form of [`ScoreTables`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTablesData {
    #[serde(default)]
    pub environmental: Vec<EnvironmentalScore>,
    #[serde(default)]
    pub abilities: Vec<ActorAbility>,
    #[serde(default)]
    pub proficiencies: Vec<ActorProficiency>,
}

/// Read-only lookup tables for all scores
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "ScoreTablesData")]
pub struct ScoreTables {
    environmental: HashMap<PointId, f64>,
    abilities: HashMap<ActorId, f64>,
    proficiencies: HashMap<ActorId, HashMap<PointId, f64>>,
}

fn checked_score(kind: &str, subject: &dyn std::fmt::Display, score: f64) -> Result<f64> {
    if !score.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err(AcoError::config(format!(
            "{} score for {} must lie in [{}, {}], got {}",
            kind, subject, SCORE_MIN, SCORE_MAX, score
        )));
    }
    Ok(score)
}

impl ScoreTables {
    /// Build the tables from raw records, validating every score
    ///
    /// Later records win over earlier ones with the same key.
    pub fn from_records(
        environmental: Vec<EnvironmentalScore>,
        abilities: Vec<ActorAbility>,
        proficiencies: Vec<ActorProficiency>,
    ) -> Result<Self> {
        let mut tables = Self::default();

        for record in environmental {
            let score = checked_score("environmental", &record.point, record.score)?;
            tables.environmental.insert(record.point, score);
        }
        for record in abilities {
            let score = checked_score("ability", &record.actor, record.score)?;
            tables.abilities.insert(record.actor, score);
        }
        for record in proficiencies {
            let subject = format!("{}@{}", record.actor, record.point);
            let score = checked_score("proficiency", &subject, record.score)?;
            tables
                .proficiencies
                .entry(record.actor)
                .or_default()
                .insert(record.point, score);
        }

        Ok(tables)
    }

    pub fn environmental(&self, point: &PointId) -> Option<f64> {
        self.environmental.get(point).copied()
    }

    pub fn ability(&self, actor: &ActorId) -> Option<f64> {
        self.abilities.get(actor).copied()
    }

    pub fn proficiency(&self, actor: &ActorId, point: &PointId) -> Option<f64> {
        self.proficiencies.get(actor)?.get(point).copied()
    }

    /// True if the actor appears in the ability or proficiency table
    pub fn knows_actor(&self, actor: &ActorId) -> bool {
        self.abilities.contains_key(actor) || self.proficiencies.contains_key(actor)
    }

    /// Fail with a lookup error unless the actor is known
    pub fn require_actor(&self, actor: &ActorId) -> Result<()> {
        if self.knows_actor(actor) {
            Ok(())
        } else {
            Err(LookupError::UnknownActor(actor.to_string()).into())
        }
    }

    /// Fail if any table references a point the weight matrix does not declare
    pub fn check_points(&self, index: &PointIndex) -> Result<()> {
        let referenced = self
            .environmental
            .keys()
            .chain(self.proficiencies.values().flat_map(|by_point| by_point.keys()));

        for point in referenced {
            if !index.contains(point.as_str()) {
                return Err(LookupError::UnknownPoint(point.to_string()).into());
            }
        }
        Ok(())
    }

    /// Proficiency row for an actor laid out by matrix column
    ///
    /// Missing entries score 0.
    pub fn proficiency_row(&self, actor: &ActorId, index: &PointIndex) -> Vec<f64> {
        index
            .ids()
            .iter()
            .map(|point| self.proficiency(actor, point).unwrap_or(0.0))
            .collect()
    }
}

impl TryFrom<ScoreTablesData> for ScoreTables {
    type Error = AcoError;

    fn try_from(data: ScoreTablesData) -> Result<Self> {
        Self::from_records(data.environmental, data.abilities, data.proficiencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ScoreTables {
        ScoreTables::from_records(
            vec![EnvironmentalScore {
                point: "a".into(),
                score: 0.25,
            }],
            vec![ActorAbility {
                actor: "1".into(),
                score: 0.5,
            }],
            vec![
                ActorProficiency {
                    actor: "1".into(),
                    point: "a".into(),
                    score: 0.9,
                },
                ActorProficiency {
                    actor: "2".into(),
                    point: "b".into(),
                    score: 0.4,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookups() {
        let t = tables();
        assert_eq!(t.environmental(&"a".into()), Some(0.25));
        assert_eq!(t.environmental(&"b".into()), None);
        assert_eq!(t.ability(&"1".into()), Some(0.5));
        assert_eq!(t.proficiency(&"1".into(), &"a".into()), Some(0.9));
        assert_eq!(t.proficiency(&"1".into(), &"b".into()), None);
        assert!(t.knows_actor(&"2".into()));
        assert!(t.require_actor(&"3".into()).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_scores() {
        let result = ScoreTables::from_records(
            vec![EnvironmentalScore {
                point: "a".into(),
                score: 1.5,
            }],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(AcoError::Config(_))));
    }

    #[test]
    fn test_check_points_flags_unknown_ids() {
        let t = tables();
        let index = PointIndex::new(vec!["start".into(), "a".into(), "finish".into()]).unwrap();
        assert!(matches!(
            t.check_points(&index),
            Err(AcoError::Lookup(LookupError::UnknownPoint(p))) if p == "b"
        ));
    }

    #[test]
    fn test_proficiency_row_defaults_to_zero() {
        let t = tables();
        let index = PointIndex::new(vec!["start".into(), "a".into(), "finish".into()]).unwrap();
        assert_eq!(t.proficiency_row(&"1".into(), &index), vec![0.0, 0.9, 0.0]);
    }

    #[test]
    fn test_deserialize_with_missing_sections() {
        let t: ScoreTables =
            serde_json::from_str(r#"{ "abilities": [{ "actor": "1", "score": 0.3 }] }"#).unwrap();
        assert_eq!(t.ability(&"1".into()), Some(0.3));
        assert_eq!(t.environmental(&"a".into()), None);
    }
}
