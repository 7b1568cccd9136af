use crate::config::model::{Config, DebugConfig, PlannerConfig, SearchConfig};
use crate::ticketing::model::Category;
use std::env;
use std::str::FromStr;

const DEFAULT_PLANNER_URL: &str = "https://api.openai.com/v1";
const DEFAULT_PLANNER_MODEL: &str = "gpt-4o-mini";

pub fn load_config() -> Config {
    let ticketing_api_key = load_required_config("TICKETING_API_KEY");

    let city = load_string_config("SEARCH_CITY", "Boise");
    let state_code = load_string_config("SEARCH_STATE_CODE", "ID");
    let radius = load_u32_config("SEARCH_RADIUS_MILES", 25);
    let category = load_category_config("SEARCH_CATEGORY", Category::Music);

    let skip_plan = load_bool_config("DEBUG_SKIP_PLAN", false);
    let event_limit = load_usize_config("DEBUG_EVENT_LIMIT");

    Config {
        ticketing_api_key,
        search: SearchConfig {
            city,
            state_code,
            radius,
            category,
        },
        planner: PlannerConfig {
            base_url: load_string_config("PLANNER_BASE_URL", DEFAULT_PLANNER_URL),
            model: load_string_config("PLANNER_MODEL", DEFAULT_PLANNER_MODEL),
            api_key: env::var("PLANNER_API_KEY").ok(),
        },
        debug_config: DebugConfig {
            skip_plan,
            event_limit,
        },
    }
}

fn load_required_config(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{} must be set.", name))
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_u32_config(name: &str, default: u32) -> u32 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an integer number.", name))
}

fn load_category_config(name: &str, default: Category) -> Category {
    match env::var(name) {
        Ok(value) => Category::from_str(&value).unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected one of 'Sports', 'Music' or 'Social'",
                name
            )
        }),
        Err(_) => default,
    }
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected an integer number.", name)
        })),
        Err(_) => None,
    }
}
