use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatsSummary {
    pub total_rounds: usize,
    pub avg_relative_to_par: f64,
    pub best_round: Option<BestRound>,
    pub courses_played: BTreeMap<String, usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BestRound {
    pub date: String,
    pub course: String,
    pub score: i64,
    pub par: i64,
    pub relative_to_par: i64,
}
