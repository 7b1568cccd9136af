use crate::ticketing::model::Category;

#[derive(Debug)]
pub struct Config {
    pub ticketing_api_key: String,
    pub search: SearchConfig,
    pub planner: PlannerConfig,
    pub debug_config: DebugConfig,
}

#[derive(Debug)]
pub struct SearchConfig {
    pub city: String,
    pub state_code: String,
    pub radius: u32,
    pub category: Category,
}

#[derive(Debug)]
pub struct PlannerConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub skip_plan: bool,
    pub event_limit: Option<usize>,
}
