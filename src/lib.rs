pub mod config {
    pub mod env_loader;
    pub mod model;
}

pub mod filter {
    pub mod engine;
    pub mod window;
}

pub mod places {
    pub mod api;
}

pub mod planner {
    pub mod api;
}

pub mod ticketing {
    pub mod api;
    pub mod dto;
    pub mod mock;
    pub mod model;
}

pub mod night;
pub mod session;
pub mod telemetry;
