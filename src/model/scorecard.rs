use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u32,
    pub par: u32,
    pub score: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreCard {
    pub id: String,
    pub date_played: String,
    pub course_name: String,
    pub holes: Vec<Hole>,
    pub notes: Option<String>,
    pub weather: Option<String>,
}

/// Creation payload. The id is minted by the store, never by the client.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoreCardCreate {
    pub date_played: String,
    pub course_name: String,
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
}

/// Partial-update payload. An absent field leaves the stored value unchanged;
/// for `notes`/`weather` an explicit JSON null clears the stored value, which
/// is why those two carry a second Option layer.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ScoreCardUpdate {
    pub date_played: Option<String>,
    pub course_name: Option<String>,
    /// When present, replaces the whole hole list atomically.
    pub holes: Option<Vec<Hole>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub weather: Option<Option<String>>,
}

fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ScoreCardUpdate {
    pub fn apply(self, scorecard: &mut ScoreCard) {
        if let Some(date_played) = self.date_played {
            scorecard.date_played = date_played;
        }
        if let Some(course_name) = self.course_name {
            scorecard.course_name = course_name;
        }
        if let Some(holes) = self.holes {
            scorecard.holes = holes;
        }
        if let Some(notes) = self.notes {
            scorecard.notes = notes;
        }
        if let Some(weather) = self.weather {
            scorecard.weather = weather;
        }
    }
}
