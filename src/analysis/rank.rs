use crate::error::AppError;

/// Military ranks in promotion order; index 1 is Recruit.
pub const RANK_NAMES: [&str; 31] = [
    "Recruit",
    "Private",
    "Gefreiter",
    "Corporal",
    "Master Corporal",
    "Sergeant",
    "Staff Sergeant",
    "Master Sergeant",
    "First Sergeant",
    "Sergeant-Major",
    "Warrant Officer 1",
    "Warrant Officer 2",
    "Warrant Officer 3",
    "Warrant Officer 4",
    "Warrant Officer 5",
    "Third Lieutenant",
    "Second Lieutenant",
    "First Lieutenant",
    "Captain",
    "Major",
    "Lieutenant Colonel",
    "Colonel",
    "Brigadier",
    "Major General",
    "Lieutenant General",
    "General",
    "Marshal",
    "Field Marshal",
    "Commander",
    "Generalissimo",
    "Legend",
];

const LEGEND_INDEX: i64 = RANK_NAMES.len() as i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankInfo {
    pub name: String,
    pub image_url: String,
}

/// Resolves a rank index to its display name and insignia.
///
/// Indices past Legend are Legend levels (`Legend 2`, `Legend 3`, ...) that
/// share the Legend insignia. Indices below 1 have no rank.
pub fn compute_rank_info(
    has_premium: bool,
    rank_index: i64,
    image_base: &str,
) -> Result<RankInfo, AppError> {
    if rank_index < 1 {
        return Err(AppError::RankLookupError { rank: rank_index });
    }

    let name = if rank_index > LEGEND_INDEX {
        format!("Legend {}", rank_index - (LEGEND_INDEX - 1))
    } else {
        RANK_NAMES[(rank_index - 1) as usize].to_string()
    };

    let insignia = rank_index.min(LEGEND_INDEX);
    let tier = if has_premium { "premium" } else { "regular" };

    Ok(RankInfo {
        name,
        image_url: format!("{}/{}/{}.png", image_base, tier, insignia),
    })
}
