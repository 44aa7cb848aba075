pub mod auth;

pub mod periods;

pub mod divisions;

pub mod users;

pub mod prokers;

pub mod indicators;

pub mod events;

pub mod evaluations;

pub mod reports;

pub use auth::configure_auth_routes;
pub use divisions::configure_division_routes;
pub use evaluations::configure_evaluation_routes;
pub use events::configure_event_routes;
pub use indicators::configure_indicator_routes;
pub use periods::configure_period_routes;
pub use prokers::configure_proker_routes;
pub use reports::configure_report_routes;
pub use users::configure_user_routes;
