use serde::Deserialize;

// Top-level wrapper around every profile response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEnvelope {
    pub response_type: ResponseType,
    #[serde(default)]
    pub response: serde_json::Value,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    #[serde(other)]
    Other,
}

// Profile payload
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamProfile {
    pub name: String,
    pub has_premium: bool,
    pub rank: i64,
    pub caught_golds: i64,
    pub earned_crystals: i64,
    pub kills: i64,
    pub deaths: i64,
    pub gear_score: i64,
    pub score: i64,
    pub score_next: i64,
    pub rating: RatingSnapshot,
    pub previous_rating: RatingSnapshot,
    #[serde(default)]
    pub supplies_usage: Vec<SupplyUsage>,
    #[serde(default)]
    pub modes_played: Vec<ModePlayed>,
    #[serde(default)]
    pub turrets_played: Vec<serde_json::Value>,
    #[serde(default)]
    pub resistance_modules: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RatingSnapshot {
    pub score: RatingEntry,
    pub golds: RatingEntry,
    pub crystals: RatingEntry,
    // previousRating sometimes omits it
    #[serde(default)]
    pub efficiency: Option<RatingEntry>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RatingEntry {
    pub position: i64,
    pub value: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupplyUsage {
    pub name: String,
    pub usages: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModePlayed {
    pub time_played: u64,
}
