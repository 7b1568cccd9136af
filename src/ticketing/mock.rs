use super::model::Event;
use chrono::{Days, Months, NaiveDateTime};

/// Fallback list used when the upstream fetch fails or comes back empty.
/// Dates are anchored to `now` so the events always land in the live
/// today / this-week / this-month / next-month windows.
pub fn mock_events(now: NaiveDateTime) -> Vec<Event> {
    let today = now.date();

    vec![
        Event::new(
            "mock-1".to_string(),
            "Downtown Live: The Night Owls".to_string(),
            "Music".to_string(),
            Some("Indie Rock".to_string()),
            today.and_hms_opt(20, 30, 0),
            Some("The Olympic Venue".to_string()),
            None,
            "1009 Main St, Boise, ID".to_string(),
        ),
        Event::new(
            "mock-2".to_string(),
            "City Hawks vs. Valley Storm".to_string(),
            "Sports".to_string(),
            Some("NBA".to_string()),
            today.succ_opt().and_then(|d| d.and_hms_opt(19, 0, 0)),
            Some("Memorial Arena".to_string()),
            None,
            "233 S Capitol Blvd, Boise, ID".to_string(),
        ),
        Event::new(
            "mock-3".to_string(),
            "Trivia & Tap Takeover".to_string(),
            "Social".to_string(),
            Some("Bar Night".to_string()),
            today
                .checked_add_days(Days::new(6))
                .and_then(|d| d.and_hms_opt(18, 0, 0)),
            Some("Highlands Taproom".to_string()),
            None,
            "2455 Harrison Blvd, Boise, ID".to_string(),
        ),
        Event::new(
            "mock-4".to_string(),
            "Gridiron Preseason Kickoff".to_string(),
            "Sports".to_string(),
            Some("NFL - Preseason".to_string()),
            today
                .checked_add_days(Days::new(12))
                .and_then(|d| d.and_hms_opt(17, 30, 0)),
            Some("Albertsons Stadium".to_string()),
            None,
            "1400 Bronco Ln, Boise, ID".to_string(),
        ),
        Event::new(
            "mock-5".to_string(),
            "Symphony Under the Stars".to_string(),
            "Music".to_string(),
            Some("Classical".to_string()),
            today
                .checked_add_months(Months::new(1))
                .and_then(|d| d.and_hms_opt(19, 30, 0)),
            Some("Outlaw Field".to_string()),
            None,
            "2355 Old Penitentiary Rd, Boise, ID".to_string(),
        ),
    ]
}
