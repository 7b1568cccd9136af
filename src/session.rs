use crate::filter::engine::{
    FilterEngine, ModuleProfile, TimeFilter, MUSIC_PROFILE, SOCIAL_PROFILE, SPORTS_PROFILE,
};
use crate::night::Suggestion;
use crate::places::api::PlacesAPI;
use crate::ticketing::api::TicketingAPI;
use crate::ticketing::model::{Category, Event};
use chrono::NaiveDateTime;
use futures::future;
use tracing::{debug, info, warn};

pub const MIN_RADIUS_MILES: u32 = 5;
pub const MAX_RADIUS_MILES: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub city: String,
    pub state_code: String,
    pub radius: u32,
}

impl SearchParams {
    pub fn new(city: String, state_code: String, radius: u32) -> Self {
        Self {
            city,
            state_code,
            radius: radius.clamp(MIN_RADIUS_MILES, MAX_RADIUS_MILES),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterState {
    pub time_filter: TimeFilter,
    pub category_filter: String,
}

impl FilterState {
    fn catch_all(profile: &ModuleProfile) -> Self {
        Self {
            time_filter: TimeFilter::ThisMonth,
            category_filter: profile.catch_all.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Browsing,
    Details(Event),
}

/// One browsing session for one module (sports, music or social). Owns the
/// search parameters, the current event list and the module's filter state.
/// Event lists are replaced wholesale on every fetch; nothing is merged.
pub struct Session {
    params: SearchParams,
    category: Category,
    engine: FilterEngine,
    pub filter_state: FilterState,
    pub view_state: ViewState,
    events: Vec<Event>,
    generation: u64,
}

impl Session {
    pub fn new(params: SearchParams, category: Category) -> Self {
        let profile = profile_for(category);

        Self {
            params,
            category,
            engine: FilterEngine::new(profile),
            filter_state: FilterState::catch_all(&profile),
            view_state: ViewState::Browsing,
            events: Vec::new(),
            generation: 0,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Replaces the whole search tuple atomically. The old event list is
    /// discarded and any fetch still in flight for it becomes stale.
    pub fn update_params(&mut self, params: SearchParams) {
        info!(
            "Search moved to {}, {} ({} mi)",
            params.city, params.state_code, params.radius
        );

        self.params = params;
        self.events.clear();
        self.generation += 1;
    }

    /// Stamp handed to a fetch so its result can be checked for staleness.
    pub fn begin_fetch(&self) -> u64 {
        self.generation
    }

    /// Applies a fetch result only if no newer search has been issued since
    /// the fetch began. Returns whether the result was applied.
    pub fn apply_fetch(&mut self, generation: u64, events: Vec<Event>) -> bool {
        if generation != self.generation {
            warn!(
                "Dropping stale fetch result (generation {} != {})",
                generation, self.generation
            );
            return false;
        }

        debug!("Applying {} events", events.len());
        self.events = events;
        true
    }

    /// Fetch + normalize + place-rating pass for the current params.
    pub async fn refresh(&mut self, api_key: &str, now: NaiveDateTime) {
        let generation = self.begin_fetch();
        let events =
            TicketingAPI::get_events(&self.params, &self.category, api_key, now).await;
        let events = attach_place_details(events).await;

        self.apply_fetch(generation, events);
    }

    /// Pure recomputation over the held list; windows come from `now`, never
    /// from a cached clock.
    pub fn visible_events(&self, now: NaiveDateTime) -> Vec<Event> {
        self.engine.filter(
            &self.events,
            self.filter_state.time_filter,
            &self.filter_state.category_filter,
            now,
        )
    }

    /// "Find My Night" over the currently visible list. `None` when nothing
    /// is visible; the caller must not open the suggestion modal then.
    pub fn find_my_night(&self, now: NaiveDateTime) -> Option<Suggestion> {
        Suggestion::open(&self.visible_events(now))
    }

    pub fn accept_suggestion(&mut self, suggestion: Suggestion) {
        self.view_state = ViewState::Details(suggestion.accept());
    }

    pub fn close_details(&mut self) {
        self.view_state = ViewState::Browsing;
    }
}

fn profile_for(category: Category) -> ModuleProfile {
    match category {
        Category::Sports => SPORTS_PROFILE,
        Category::Music => MUSIC_PROFILE,
        Category::Social => SOCIAL_PROFILE,
    }
}

async fn attach_place_details(events: Vec<Event>) -> Vec<Event> {
    future::join_all(events.into_iter().map(|event| async move {
        let details = PlacesAPI::get_place_details(&event.address).await;

        event.with_google_data(details)
    }))
    .await
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

    fn event(id: &str) -> Event {
        Event::new(
            id.to_string(),
            format!("Event {}", id),
            "Music".to_string(),
            Some("Jazz".to_string()),
            NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(20, 0, 0),
            Some("The Spot".to_string()),
            None,
            "1 Main St, Boise, ID".to_string(),
        )
    }

    fn session() -> Session {
        Session::new(
            SearchParams::new("Boise".to_string(), "ID".to_string(), 25),
            Category::Music,
        )
    }

    #[test_log::test]
    fn radius_should_clamp_to_the_allowed_range() {
        assert_eq!(SearchParams::new("a".into(), "ID".into(), 1).radius, 5);
        assert_eq!(SearchParams::new("a".into(), "ID".into(), 500).radius, 100);
        assert_eq!(SearchParams::new("a".into(), "ID".into(), 40).radius, 40);
    }

    #[test_log::test]
    fn a_stale_fetch_result_should_be_dropped() {
        let mut session = session();
        let stale = session.begin_fetch();

        session.update_params(SearchParams::new("Moscow".to_string(), "ID".to_string(), 30));

        assert!(!session.apply_fetch(stale, vec![event("stale")]));
        assert!(session.events().is_empty());

        let fresh = session.begin_fetch();

        assert!(session.apply_fetch(fresh, vec![event("fresh")]));
        assert_eq!(session.events().len(), 1);
    }

    #[test_log::test]
    fn updating_params_should_discard_the_held_list() {
        let mut session = session();
        let generation = session.begin_fetch();
        session.apply_fetch(generation, vec![event("a")]);

        session.update_params(SearchParams::new("Nampa".to_string(), "ID".to_string(), 25));

        assert!(session.events().is_empty());
    }

    #[test_log::test]
    fn accepting_a_suggestion_should_open_its_details() {
        let mut session = session();
        let generation = session.begin_fetch();
        session.apply_fetch(generation, vec![event("only")]);

        let suggestion = session.find_my_night(now()).unwrap();
        session.accept_suggestion(suggestion);

        match &session.view_state {
            ViewState::Details(event) => assert_eq!(event.id, "only"),
            other => panic!("expected details view, got {:?}", other),
        }
    }

    #[test_log::test]
    fn find_my_night_should_not_open_on_an_empty_view() {
        let session = session();

        assert!(session.find_my_night(now()).is_none());
    }
}
