pub mod app_state;
pub mod classifier;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod logging;
pub mod rater;
pub mod rating;
pub mod signals;
pub mod web;

pub use rater::{rate_url, rate_url_with};
pub use rating::{Rating, RatingOutcome, RatingResult};
