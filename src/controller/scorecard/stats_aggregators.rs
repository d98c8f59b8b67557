use std::collections::BTreeMap;

use crate::model::{BestRound, ScoreCard, StatsSummary};

fn hole_totals(scorecard: &ScoreCard) -> (i64, i64) {
    let par = scorecard.holes.iter().map(|hole| i64::from(hole.par)).sum();
    let score = scorecard
        .holes
        .iter()
        .map(|hole| i64::from(hole.score))
        .sum();
    (par, score)
}

/// Total strokes minus total par for one round; a round with no holes is 0.
#[must_use]
pub fn relative_to_par(scorecard: &ScoreCard) -> i64 {
    let (par, score) = hole_totals(scorecard);
    score - par
}

/// Recomputed from scratch on every call, nothing is cached. The best round
/// is picked with strict less-than during a forward scan, so the first record
/// inserted wins an exact tie.
#[must_use]
pub fn compute_stats(scorecards: &[ScoreCard]) -> StatsSummary {
    if scorecards.is_empty() {
        return StatsSummary {
            total_rounds: 0,
            avg_relative_to_par: 0.0,
            best_round: None,
            courses_played: BTreeMap::new(),
        };
    }

    let total_rounds = scorecards.len();
    let mut total_relative: i64 = 0;
    let mut best_relative = i64::MAX;
    let mut best_round: Option<BestRound> = None;
    let mut courses_played: BTreeMap<String, usize> = BTreeMap::new();

    for scorecard in scorecards {
        let (par, score) = hole_totals(scorecard);
        let relative = score - par;
        total_relative += relative;

        if relative < best_relative {
            best_relative = relative;
            best_round = Some(BestRound {
                date: scorecard.date_played.clone(),
                course: scorecard.course_name.clone(),
                score,
                par,
                relative_to_par: relative,
            });
        }

        *courses_played
            .entry(scorecard.course_name.clone())
            .or_default() += 1;
    }

    StatsSummary {
        total_rounds,
        avg_relative_to_par: total_relative as f64 / total_rounds as f64,
        best_round,
        courses_played,
    }
}
