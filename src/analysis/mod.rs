pub mod rank;
pub mod rating;
pub mod summary;
