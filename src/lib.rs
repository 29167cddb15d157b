pub mod analysis;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod query;

pub use analysis::summary::{summarize, ProfileSummary};
pub use api::client::{parse_profile_response, RatingsClient};
pub use config::Config;
pub use error::AppError;
pub use query::{Language, ProfileQuery};
