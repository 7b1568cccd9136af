use super::model::Event;
use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

lazy_static! {
    static ref SQUASH_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedEvents>,
}

impl EventsResponse {
    pub fn into_events(self) -> Vec<RawEvent> {
        self.embedded.map(|e| e.events).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct EmbeddedEvents {
    pub events: Vec<RawEvent>,
}

// Note: some String fields need the custom deserializer due to being optional
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(deserialize_with = "deserialize_str")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub name: String,
    #[serde(default)]
    pub dates: Option<RawDates>,
    #[serde(default)]
    pub classifications: Vec<RawClassification>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<RawEmbedded>,
}

impl RawEvent {
    #[tracing::instrument(skip(self), fields(self.id = %self.id))]
    pub fn to_model(&self) -> Event {
        let classification = self.classifications.first();
        let category = classification
            .and_then(|c| c.segment.as_ref())
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "Social".to_string());
        let subcategory = classification
            .and_then(|c| c.genre.as_ref())
            .map(|g| g.name.clone());
        let venue = self
            .embedded
            .as_ref()
            .and_then(|e| e.venues.first());

        Event::new(
            self.id.clone(),
            clean_name(&self.name),
            category,
            subcategory,
            self.start_date(),
            venue.map(|v| v.name.clone()).filter(|n| !n.is_empty()),
            self.images.first().map(|i| i.url.clone()),
            compose_address(venue),
        )
    }

    fn start_date(&self) -> Option<NaiveDateTime> {
        let start = self.dates.as_ref()?.start.as_ref()?;

        match start.date_time.as_deref() {
            Some(raw) => parse_event_date(raw),
            None => None,
        }
    }
}

// Upstream titles occasionally carry embedded newlines and double spaces.
fn clean_name(raw: &str) -> String {
    SQUASH_WHITESPACE.replace_all(raw.trim(), " ").to_string()
}

/// Composed the way the upstream renders it: missing venue sub-fields become
/// the literal string "undefined".
fn compose_address(venue: Option<&RawVenue>) -> String {
    let line = venue
        .and_then(|v| v.address.as_ref())
        .and_then(|a| a.line1.as_deref())
        .unwrap_or("undefined");
    let city = venue
        .and_then(|v| v.city.as_ref())
        .map(|c| c.name.as_str())
        .unwrap_or("undefined");
    let state = venue
        .and_then(|v| v.state.as_ref())
        .and_then(|s| s.state_code.as_deref())
        .unwrap_or("undefined");

    format!("{}, {}, {}", line, city, state)
}

fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|err| {
            warn!("Failed to parse event date '{raw}'. Err: {err}");
            err
        })
        .ok()
}

#[derive(Debug, Deserialize)]
pub struct RawDates {
    pub start: Option<RawStart>,
}

#[derive(Debug, Deserialize)]
pub struct RawStart {
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawClassification {
    pub segment: Option<RawNamed>,
    pub genre: Option<RawNamed>,
}

#[derive(Debug, Deserialize)]
pub struct RawNamed {
    #[serde(deserialize_with = "deserialize_str")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawImage {
    #[serde(deserialize_with = "deserialize_str")]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct RawEmbedded {
    #[serde(default)]
    pub venues: Vec<RawVenue>,
}

#[derive(Debug, Deserialize)]
pub struct RawVenue {
    #[serde(deserialize_with = "deserialize_str")]
    pub name: String,
    pub address: Option<RawAddress>,
    pub city: Option<RawCity>,
    pub state: Option<RawState>,
}

#[derive(Debug, Deserialize)]
pub struct RawAddress {
    pub line1: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawState {
    #[serde(rename = "stateCode")]
    pub state_code: Option<String>,
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s.parse().map_err(de::Error::custom)?,
        _ => String::new(),
    })
}
