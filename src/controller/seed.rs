use crate::model::{Hole, ScoreCardCreate, ScoreCardStore};

fn holes_from_pairs(pairs: &[(u32, u32)]) -> Vec<Hole> {
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

/// Loads two sample rounds, but only when the collection is empty at the
/// moment of the call. Callers decide when this runs (the `--seed-demo-data`
/// flag, or a test fixture); service startup never invokes it on its own.
pub async fn seed_sample_scorecards(store: &ScoreCardStore) {
    if !store.is_empty().await {
        return;
    }

    let augusta = ScoreCardCreate {
        date_played: "2025-02-15".to_string(),
        course_name: "Augusta National Golf Club".to_string(),
        holes: holes_from_pairs(&[
            (4, 5),
            (5, 5),
            (4, 4),
            (3, 3),
            (4, 5),
            (3, 4),
            (4, 4),
            (5, 6),
            (4, 4),
            (4, 5),
            (4, 5),
            (3, 4),
            (5, 6),
            (4, 4),
            (5, 5),
            (3, 3),
            (4, 4),
            (4, 5),
        ]),
        notes: Some("First time playing Augusta. Beautiful course!".to_string()),
        weather: Some("Sunny, 75°F".to_string()),
    };

    let pebble_beach = ScoreCardCreate {
        date_played: "2025-03-01".to_string(),
        course_name: "Pebble Beach Golf Links".to_string(),
        holes: holes_from_pairs(&[
            (4, 4),
            (5, 6),
            (4, 4),
            (4, 5),
            (3, 3),
            (5, 5),
            (3, 2),
            (4, 4),
            (4, 4),
            (4, 5),
            (4, 4),
            (3, 3),
            (4, 4),
            (5, 5),
            (4, 4),
            (4, 5),
            (3, 4),
            (5, 6),
        ]),
        notes: Some("Amazing ocean views. Wind was a challenge.".to_string()),
        weather: Some("Partly cloudy, windy, 68°F".to_string()),
    };

    store.create(augusta).await;
    store.create(pebble_beach).await;
    tracing::info!("seeded {} sample scorecards", store.len().await);
}
