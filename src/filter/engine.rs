use super::window::DateWindow;
use crate::ticketing::model::Event;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Today,
    ThisWeek,
    ThisMonth,
    NextMonth,
}

/// Per-module filtering vocabulary. The sports and music views used to carry
/// two copies of the same branching; the profile is what actually differed.
#[derive(Debug, Clone, Copy)]
pub struct ModuleProfile {
    /// Category value meaning "show everything in this module".
    pub catch_all: &'static str,
    /// Exact subcategory tokens offered by the module's filter bar.
    pub known_subcategories: &'static [&'static str],
    /// Sports matches league tokens case-sensitively, music folds case.
    pub case_insensitive: bool,
}

pub const SPORTS_PROFILE: ModuleProfile = ModuleProfile {
    catch_all: "Sports",
    known_subcategories: &["NFL", "NBA", "MLB", "NHL"],
    case_insensitive: false,
};

pub const MUSIC_PROFILE: ModuleProfile = ModuleProfile {
    catch_all: "Music",
    known_subcategories: &[],
    case_insensitive: true,
};

pub const SOCIAL_PROFILE: ModuleProfile = ModuleProfile {
    catch_all: "Social",
    known_subcategories: &[],
    case_insensitive: true,
};

pub struct FilterEngine {
    profile: ModuleProfile,
}

impl FilterEngine {
    pub fn new(profile: ModuleProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ModuleProfile {
        &self.profile
    }

    /// Stable filter: the in-order subsequence matching both the time window
    /// and the category vocabulary. Pure over (events, filters, now).
    pub fn filter(
        &self,
        events: &[Event],
        time_filter: TimeFilter,
        category_filter: &str,
        now: NaiveDateTime,
    ) -> Vec<Event> {
        let window = DateWindow::from_now(now);

        events
            .iter()
            .filter(|event| {
                time_matches(&window, time_filter, event)
                    && self.category_matches(event, category_filter)
            })
            .cloned()
            .collect()
    }

    fn category_matches(&self, event: &Event, category_filter: &str) -> bool {
        if category_filter == self.profile.catch_all {
            return true;
        }

        let Some(subcategory) = event.subcategory.as_deref() else {
            return false;
        };

        if self.profile.known_subcategories.contains(&category_filter) {
            return if self.profile.case_insensitive {
                folded_contains(subcategory, category_filter)
            } else {
                subcategory.contains(category_filter)
            };
        }

        // Free-form genre search always folds case
        folded_contains(subcategory, category_filter)
    }
}

fn folded_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// An event without a parseable date never matches any window.
fn time_matches(window: &DateWindow, time_filter: TimeFilter, event: &Event) -> bool {
    let Some(date) = event.date else {
        return false;
    };

    match time_filter {
        TimeFilter::Today => window.start_of_day <= date && date <= window.end_of_day,
        TimeFilter::ThisWeek => window.start_of_day <= date && date <= window.end_of_week,
        TimeFilter::ThisMonth => window.start_of_day <= date && date <= window.end_of_month,
        TimeFilter::NextMonth => window.end_of_month < date && date <= window.end_of_next_month,
    }
}
