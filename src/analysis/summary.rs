use crate::api::endpoints::UNRANKED_SENTINEL;
use crate::api::models::{RatingEntry, SupplyUsage, UpstreamProfile};
use crate::error::AppError;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::rank::{compute_rank_info, RankInfo};
use super::rating::{compute_rating_delta, Arrow, RatingDelta};

/// Leaderboard position; unranked players render as the string `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Unranked,
    Ranked(i64),
}

impl Position {
    pub fn from_raw(raw: i64) -> Self {
        if raw == UNRANKED_SENTINEL {
            Position::Unranked
        } else {
            Position::Ranked(raw)
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Position::Unranked => serializer.serialize_str("0"),
            Position::Ranked(n) => serializer.serialize_i64(*n),
        }
    }
}

/// Efficiency rating, stored upstream in hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyValue {
    Unranked,
    Value(i64),
}

impl EfficiencyValue {
    pub fn from_raw(raw: i64) -> Self {
        if raw == UNRANKED_SENTINEL {
            EfficiencyValue::Unranked
        } else {
            EfficiencyValue::Value(raw.div_euclid(100))
        }
    }
}

impl Serialize for EfficiencyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EfficiencyValue::Unranked => serializer.serialize_str("0"),
            EfficiencyValue::Value(n) => serializer.serialize_i64(*n),
        }
    }
}

/// Kills per death. A player with no deaths reports the raw kill count as a
/// number; otherwise the ratio is a string with exactly two decimals.
///
/// Halfway quotients round up (`1/8` is `"0.13"`), unlike `{:.2}` which
/// rounds exact binary ties to even.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KillDeathRatio {
    Kills(i64),
    Ratio(f64),
}

impl KillDeathRatio {
    pub fn compute(kills: i64, deaths: i64) -> Self {
        if deaths == 0 {
            KillDeathRatio::Kills(kills)
        } else {
            KillDeathRatio::Ratio(kills as f64 / deaths as f64)
        }
    }
}

impl fmt::Display for KillDeathRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KillDeathRatio::Kills(kills) => write!(f, "{}", kills),
            KillDeathRatio::Ratio(ratio) => {
                // Only eighths can sit exactly on a hundredths tie.
                let eighths = ratio * 8.0;
                if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
                    write!(f, "{:.2}", ratio + 0.001)
                } else {
                    write!(f, "{:.2}", ratio)
                }
            }
        }
    }
}

impl Serialize for KillDeathRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            KillDeathRatio::Kills(kills) => serializer.serialize_i64(*kills),
            KillDeathRatio::Ratio(_) => serializer.collect_str(self),
        }
    }
}

/// Key of the synthetic total; a supply with this name is folded into it.
pub const TOTAL_USAGES_KEY: &str = "totalUsages";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplies {
    #[serde(flatten)]
    pub usages: BTreeMap<String, u64>,
    #[serde(rename = "totalUsages")]
    pub total_usages: u64,
}

impl Supplies {
    pub fn from_usages(entries: &[SupplyUsage]) -> Self {
        let mut usages = BTreeMap::new();
        let mut total_usages = 0;
        for entry in entries {
            total_usages += entry.usages;
            if entry.name != TOTAL_USAGES_KEY {
                usages.insert(entry.name.clone(), entry.usages);
            }
        }

        Supplies {
            usages,
            total_usages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Playtime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Playtime {
    pub fn from_millis(total_ms: u64) -> Self {
        let total_seconds = total_ms / 1000;
        Playtime {
            hours: total_seconds / 3600,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub exp_now: i64,
    pub exp_next: i64,
    pub exp_left: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionPair {
    pub now: Position,
    pub before: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueTriple {
    pub now: i64,
    pub before: i64,
    pub arrow: Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBlock {
    pub position: PositionPair,
    pub value: ValueTriple,
}

impl RatingBlock {
    fn new(current: &RatingEntry, previous: &RatingEntry, delta: RatingDelta) -> Self {
        RatingBlock {
            position: PositionPair {
                now: Position::from_raw(current.position),
                before: Position::from_raw(previous.position),
            },
            value: ValueTriple {
                now: delta.current,
                before: delta.previous,
                arrow: delta.arrow,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EfficiencyPosition {
    pub now: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EfficiencyNow {
    pub now: EfficiencyValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EfficiencyBlock {
    pub position: EfficiencyPosition,
    pub value: EfficiencyNow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ratings {
    pub experience: RatingBlock,
    pub golds: RatingBlock,
    pub crystals: RatingBlock,
    pub efficiency: EfficiencyBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingDeltas {
    pub experience: RatingDelta,
    pub golds: RatingDelta,
    pub crystals: RatingDelta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: String,
    pub premium: String,
    pub rank: String,
    pub rank_img: String,
    pub golds: i64,
    pub crystals: i64,
    pub kills: i64,
    pub deaths: i64,
    pub kd: KillDeathRatio,
    pub turrets_played: usize,
    pub resistance_modules: usize,
    pub gear_score: i64,
    pub exp: Experience,
    pub playtime: Playtime,
    pub supplies: Supplies,
    pub rating: Ratings,
}

pub fn build_profile_summary(
    profile: &UpstreamProfile,
    rank: RankInfo,
    deltas: RatingDeltas,
) -> ProfileSummary {
    let current = &profile.rating;
    let previous = &profile.previous_rating;

    let efficiency = current.efficiency.unwrap_or(RatingEntry {
        position: UNRANKED_SENTINEL,
        value: UNRANKED_SENTINEL,
    });

    let total_ms: u64 = profile.modes_played.iter().map(|m| m.time_played).sum();

    ProfileSummary {
        name: profile.name.clone(),
        premium: if profile.has_premium { "Yes" } else { "No" }.to_string(),
        rank: rank.name,
        rank_img: rank.image_url,
        golds: profile.caught_golds,
        crystals: profile.earned_crystals,
        kills: profile.kills,
        deaths: profile.deaths,
        kd: KillDeathRatio::compute(profile.kills, profile.deaths),
        turrets_played: profile.turrets_played.len(),
        resistance_modules: profile.resistance_modules.len(),
        gear_score: profile.gear_score,
        exp: Experience {
            exp_now: profile.score,
            exp_next: profile.score_next,
            exp_left: profile.score_next - profile.score,
        },
        playtime: Playtime::from_millis(total_ms),
        supplies: Supplies::from_usages(&profile.supplies_usage),
        rating: Ratings {
            experience: RatingBlock::new(&current.score, &previous.score, deltas.experience),
            golds: RatingBlock::new(&current.golds, &previous.golds, deltas.golds),
            crystals: RatingBlock::new(&current.crystals, &previous.crystals, deltas.crystals),
            efficiency: EfficiencyBlock {
                position: EfficiencyPosition {
                    now: Position::from_raw(efficiency.position),
                },
                value: EfficiencyNow {
                    now: EfficiencyValue::from_raw(efficiency.value),
                },
            },
        },
    }
}

/// Resolves rank and rating deltas, then reshapes the profile.
pub fn summarize(
    profile: &UpstreamProfile,
    rank_image_base: &str,
) -> Result<ProfileSummary, AppError> {
    let rank = compute_rank_info(profile.has_premium, profile.rank, rank_image_base)?;

    let current = &profile.rating;
    let previous = &profile.previous_rating;
    let deltas = RatingDeltas {
        experience: compute_rating_delta(current.score.value, previous.score.value),
        golds: compute_rating_delta(current.golds.value, previous.golds.value),
        crystals: compute_rating_delta(current.crystals.value, previous.crystals.value),
    };

    Ok(build_profile_summary(profile, rank, deltas))
}
