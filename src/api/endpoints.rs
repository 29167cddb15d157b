// Upstream endpoints and wire-level markers

pub const PROFILE_ENDPOINT: &str = "https://ratings.tankionline.com/api/eu/profile/";
pub const RANK_IMAGE_BASE: &str = "https://tankionline.com/play/static/images/ranks";

pub const USER_PARAM: &str = "user";
pub const LANG_PARAM: &str = "lang";

pub const USER_AGENT: &str = concat!("tanki_ratings/", env!("CARGO_PKG_VERSION"));

/// Position or value the API reports for a player without a rating.
pub const UNRANKED_SENTINEL: i64 = -1;
