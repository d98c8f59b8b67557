use rusty_scorecard::model::{Hole, ScoreCardCreate};

#[must_use]
pub fn holes_from_pairs(pairs: &[(u32, u32)]) -> Vec<Hole> {
    pairs
        .iter()
        .enumerate()
        .map(|(idx, &(par, score))| Hole {
            number: idx as u32 + 1,
            par,
            score,
        })
        .collect()
}

#[must_use]
pub fn sample_round(course_name: &str, date_played: &str, pairs: &[(u32, u32)]) -> ScoreCardCreate {
    ScoreCardCreate {
        date_played: date_played.to_string(),
        course_name: course_name.to_string(),
        holes: holes_from_pairs(pairs),
        notes: None,
        weather: None,
    }
}

/// 18 holes of par `par`, scoring `score` on the first `over` holes and par on
/// the rest.
#[must_use]
pub fn front_loaded_pairs(par: u32, score: u32, over: usize) -> Vec<(u32, u32)> {
    (0..18)
        .map(|i| (par, if i < over { score } else { par }))
        .collect()
}
