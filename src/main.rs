use chrono::Local;
use nightowl::config::env_loader::load_config;
use nightowl::planner::api::PlannerAPI;
use nightowl::session::{SearchParams, Session};
use nightowl::telemetry;
use tracing::info;

#[tokio::main]
async fn main() {
    let _guard = telemetry::init().await;

    let config = load_config();
    let now = Local::now().naive_local();

    let params = SearchParams::new(
        config.search.city.clone(),
        config.search.state_code.clone(),
        config.search.radius,
    );
    let mut session = Session::new(params, config.search.category);

    session.refresh(&config.ticketing_api_key, now).await;

    let mut visible = session.visible_events(now);

    if let Some(limit) = config.debug_config.event_limit {
        visible.truncate(limit);
    }

    for event in &visible {
        info!(
            "{} | {} | {} | {}",
            event.name,
            event.subcategory.as_deref().unwrap_or("-"),
            event
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unscheduled".to_string()),
            event.address
        );
    }

    let Some(suggestion) = session.find_my_night(now) else {
        info!("Nothing on tonight. Try widening the search.");
        return;
    };

    info!("Tonight's pick: {}", suggestion.current().name);

    if !config.debug_config.skip_plan {
        let plan = PlannerAPI::generate_plan(&config.planner, suggestion.current()).await;

        info!("{}", plan);
    }

    session.accept_suggestion(suggestion);
}
