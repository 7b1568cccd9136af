use crate::ticketing::model::GoogleData;
use std::hash::{DefaultHasher, Hash, Hasher};
use tracing::debug;

pub struct PlacesAPI;

impl PlacesAPI {
    /// Mocked in this deployment: the rating is derived from a stable hash of
    /// the address so repeated lookups agree within a session.
    #[tracing::instrument]
    pub async fn get_place_details(address: &str) -> GoogleData {
        let mut hasher = DefaultHasher::new();
        address.hash(&mut hasher);
        let seed = hasher.finish();

        // 3.0..=5.0 in steps of 0.1, totals 20..=2019
        let rating = 3.0 + (seed % 21) as f64 / 10.0;
        let user_ratings_total = 20 + (seed / 21 % 2000) as u32;

        debug!("Rated '{}' at {:.1} ({} reviews)", address, rating, user_ratings_total);

        GoogleData {
            rating,
            user_ratings_total,
        }
    }
}
