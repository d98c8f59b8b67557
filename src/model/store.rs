use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::model::scorecard::{ScoreCard, ScoreCardCreate, ScoreCardUpdate};

pub type ScoreCardList = Arc<RwLock<Vec<ScoreCard>>>;

/// Owns the authoritative in-memory collection. Cloning shares the same
/// underlying list, so one instance built in `main` can be handed to every
/// worker via `web::Data`.
#[derive(Clone, Default)]
pub struct ScoreCardStore {
    scorecards: ScoreCardList,
}

impl ScoreCardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh id and appends the record to the end of the collection.
    pub async fn create(&self, data: ScoreCardCreate) -> ScoreCard {
        let scorecard = ScoreCard {
            id: Uuid::new_v4().to_string(),
            date_played: data.date_played,
            course_name: data.course_name,
            holes: data.holes,
            notes: data.notes,
            weather: data.weather,
        };
        let mut scorecards = self.scorecards.write().await;
        scorecards.push(scorecard.clone());
        scorecard
    }

    /// Full collection in insertion order.
    pub async fn list_all(&self) -> Vec<ScoreCard> {
        self.scorecards.read().await.clone()
    }

    /// # Errors
    ///
    /// Will return `Err` if no record matches the id
    pub async fn get(&self, id: &str) -> Result<ScoreCard, AppError> {
        let scorecards = self.scorecards.read().await;
        scorecards
            .iter()
            .find(|scorecard| scorecard.id == id)
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("lookup miss for scorecard {id}");
                AppError::NotFound(format!("scorecard {id}"))
            })
    }

    /// Applies the partial payload to the matching record. Fields absent from
    /// the payload are left as they were; the id itself is never touched.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no record matches the id
    pub async fn update(&self, id: &str, patch: ScoreCardUpdate) -> Result<ScoreCard, AppError> {
        let mut scorecards = self.scorecards.write().await;
        match scorecards.iter_mut().find(|scorecard| scorecard.id == id) {
            Some(scorecard) => {
                patch.apply(scorecard);
                Ok(scorecard.clone())
            }
            None => {
                tracing::warn!("update miss for scorecard {id}");
                Err(AppError::NotFound(format!("scorecard {id}")))
            }
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if no record matches the id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut scorecards = self.scorecards.write().await;
        match scorecards.iter().position(|scorecard| scorecard.id == id) {
            Some(idx) => {
                scorecards.remove(idx);
                Ok(())
            }
            None => {
                tracing::warn!("delete miss for scorecard {id}");
                Err(AppError::NotFound(format!("scorecard {id}")))
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.scorecards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scorecards.read().await.is_empty()
    }
}
