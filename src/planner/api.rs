use crate::config::model::PlannerConfig;
use crate::ticketing::model::Event;
use serde::Deserialize;
use serde_json::json;
use std::fmt::{Display, Formatter};
use tracing::{error, info};

const FALLBACK_PLAN: &str =
    "Sorry, I couldn't put a plan together right now. The event is still a great pick - \
     grab dinner nearby beforehand and you're set!";

pub struct PlannerAPI;

impl PlannerAPI {
    /// Asks the completion endpoint for a short night-out itinerary built
    /// around the event. Any failure degrades to a fixed apology string, so
    /// the caller always has text to show.
    #[tracing::instrument(skip(config, event), fields(event = %event.name))]
    pub async fn generate_plan(config: &PlannerConfig, event: &Event) -> String {
        match Self::request_plan(config, event).await {
            Ok(plan) => plan,
            Err(e) => {
                error!("Plan generation failed: {e}");
                FALLBACK_PLAN.to_string()
            }
        }
    }

    async fn request_plan(config: &PlannerConfig, event: &Event) -> Result<String, PlannerError> {
        let prompt = build_prompt(event);

        info!("Requesting a night plan");

        let mut request = reqwest::Client::new()
            .post(format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ))
            .json(&json!({
                "model": config.model,
                "temperature": 0.7,
                "max_tokens": 400,
                "messages": [
                    {
                        "role": "system",
                        "content": "You are a local nightlife concierge. Reply with a short, \
                                    upbeat three-step evening itinerary."
                    },
                    { "role": "user", "content": prompt }
                ]
            }));

        if let Some(key) = &config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PlannerError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| PlannerError::Unavailable(e.to_string()))?
            .json::<CompletionResponse>()
            .await
            .map_err(|e| PlannerError::Unavailable(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(PlannerError::EmptyCompletion)
    }
}

fn build_prompt(event: &Event) -> String {
    let venue = event.venue_name.as_deref().unwrap_or("a local venue");
    let date = event
        .date
        .map(|d| d.format("%A, %B %-d at %-I:%M %p").to_string())
        .unwrap_or_else(|| "an upcoming evening".to_string());

    format!(
        "Plan a night out around \"{}\" at {} on {}. \
         Suggest somewhere to eat before and something low-key after.",
        event.name, venue, date
    )
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Debug)]
pub enum PlannerError {
    Unavailable(String),
    EmptyCompletion,
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::Unavailable(reason) => write!(f, "planner unavailable: {}", reason),
            PlannerError::EmptyCompletion => write!(f, "planner returned no text"),
        }
    }
}
