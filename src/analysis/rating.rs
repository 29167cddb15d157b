use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrow {
    Up,
    Down,
    Flat,
}

impl Arrow {
    pub fn symbol(&self) -> &'static str {
        match self {
            Arrow::Up => "▲",
            Arrow::Down => "▼",
            Arrow::Flat => "=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingDelta {
    pub current: i64,
    pub previous: i64,
    pub arrow: Arrow,
}

pub fn compute_rating_delta(current: i64, previous: i64) -> RatingDelta {
    let arrow = match current.cmp(&previous) {
        Ordering::Greater => Arrow::Up,
        Ordering::Less => Arrow::Down,
        Ordering::Equal => Arrow::Flat,
    };

    RatingDelta {
        current,
        previous,
        arrow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_follows_comparison() {
        assert_eq!(compute_rating_delta(5, 5).arrow, Arrow::Flat);
        assert_eq!(compute_rating_delta(5, 3).arrow, Arrow::Up);
        assert_eq!(compute_rating_delta(3, 5).arrow, Arrow::Down);
    }

    #[test]
    fn values_pass_through() {
        let delta = compute_rating_delta(-1, 250);
        assert_eq!(delta.current, -1);
        assert_eq!(delta.previous, 250);
        assert_eq!(delta.arrow, Arrow::Down);
    }

    #[test]
    fn arrow_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Arrow::Flat).unwrap(), "\"flat\"");
        assert_eq!(serde_json::to_string(&Arrow::Up).unwrap(), "\"up\"");
    }
}
