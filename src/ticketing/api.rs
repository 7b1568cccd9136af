use super::dto::EventsResponse;
use super::mock::mock_events;
use super::model::{Category, Event};
use crate::session::SearchParams;
use chrono::NaiveDateTime;
use itertools::Itertools;
use lazy_static::lazy_static;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::fmt::{Display, Formatter};
use tracing::{error, info, warn};

const TICKETING_EVENTS_URL: &str = "https://app.ticketmaster.com/discovery/v2/events.json";
const MAX_RETRIES: u32 = 5;

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
        ))
        .build();
}

pub struct TicketingAPI;

impl TicketingAPI {
    /// Fetches events around the searched city, ascending date order upstream.
    /// A transport failure or an empty result set falls back to the mock list,
    /// so the caller always gets something to render.
    #[tracing::instrument(skip(api_key))]
    pub async fn get_events(
        params: &SearchParams,
        category: &Category,
        api_key: &str,
        now: NaiveDateTime,
    ) -> Vec<Event> {
        resolve(Self::get_remote_events(params, category, api_key).await, now)
    }

    async fn get_remote_events(
        params: &SearchParams,
        category: &Category,
        api_key: &str,
    ) -> Result<Vec<Event>, APIError> {
        let category: &'static str = category.into();

        info!("Getting {} events near {}", category, params.city);

        let json_response = REST_CLIENT
            .get(format!(
                "{}?apikey={}&city={}&stateCode={}&radius={}&unit=miles&classificationName={}",
                TICKETING_EVENTS_URL,
                api_key,
                params.city,
                params.state_code,
                params.radius,
                category
            ))
            .send()
            .await
            .map_err(|e| APIError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| APIError::Transport(e.to_string()))?
            .text()
            .await
            .map_err(|e| APIError::Transport(e.to_string()))?;

        let parsed_response = serde_json::from_str::<EventsResponse>(&json_response);

        match parsed_response {
            Ok(parsed_response) => Ok(normalize(parsed_response)),
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(APIError::InvalidResponse)
            }
        }
    }
}

/// Maps the raw payload into models, keeping only the first occurrence of
/// each event id (the upstream repeats events across venues).
pub fn normalize(response: EventsResponse) -> Vec<Event> {
    response
        .into_events()
        .iter()
        .map(|raw| raw.to_model())
        .unique_by(|event| event.id.clone())
        .collect()
}

/// Failure and an empty result set are treated alike: both swap in the
/// sample list so the screen never goes blank.
pub fn resolve(fetched: Result<Vec<Event>, APIError>, now: NaiveDateTime) -> Vec<Event> {
    match fetched {
        Ok(events) if !events.is_empty() => events,
        Ok(_) => {
            warn!("Upstream returned no events. Falling back to sample data");
            mock_events(now)
        }
        Err(e) => {
            error!("Event fetch failed ({e}). Falling back to sample data");
            mock_events(now)
        }
    }
}

#[derive(Debug)]
pub enum APIError {
    Transport(String),
    InvalidResponse,
}

impl Display for APIError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            APIError::Transport(reason) => write!(f, "transport error: {}", reason),
            APIError::InvalidResponse => write!(f, "invalid response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test_log::test]
    fn an_empty_upstream_result_should_fall_back_to_the_sample_list() {
        let events = resolve(Ok(Vec::new()), now());

        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| !e.id.is_empty() && !e.name.is_empty()));
    }

    #[test_log::test]
    fn a_transport_failure_should_fall_back_to_the_sample_list() {
        let events = resolve(Err(APIError::Transport("timeout".to_string())), now());

        assert_eq!(events.len(), 5);
    }

    #[test_log::test]
    fn a_populated_result_should_pass_through_untouched() {
        let fetched = mock_events(now());
        let events = resolve(Ok(fetched.clone()), now());

        assert_eq!(events, fetched);
    }

    #[test_log::test]
    fn duplicate_ids_should_keep_only_the_first_occurrence() {
        let response = serde_json::from_str::<EventsResponse>(
            r##"
              {
                "_embedded": {
                  "events": [
                    { "id": "dup", "name": "Main Listing" },
                    { "id": "solo", "name": "Open Mic Night" },
                    { "id": "dup", "name": "Cross-Listed Copy" }
                  ]
                }
              }"##,
        )
        .unwrap();

        let events = normalize(response);
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["Main Listing", "Open Mic Night"]);
    }
}
