use chrono::NaiveDateTime;

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/640x360?text=No+Image+Available";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    /// `None` when the upstream date is absent or unparseable; such an event
    /// never matches a time filter.
    pub date: Option<NaiveDateTime>,
    pub venue_name: Option<String>,
    pub image_url: String,
    pub address: String,
    pub google_data: Option<GoogleData>,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        category: String,
        subcategory: Option<String>,
        date: Option<NaiveDateTime>,
        venue_name: Option<String>,
        image_url: Option<String>,
        address: String,
    ) -> Self {
        Self {
            id,
            name,
            category,
            subcategory,
            date,
            venue_name,
            image_url: image_url.unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            address,
            google_data: None,
        }
    }

    pub fn with_google_data(mut self, google_data: GoogleData) -> Self {
        self.google_data = Some(google_data);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoogleData {
    pub rating: f64,
    pub user_ratings_total: u32,
}

#[derive(strum::IntoStaticStr, strum::EnumString, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sports,
    Music,
    Social,
}
