pub mod auth;
pub mod divisions;
pub mod evaluations;
pub mod events;
pub mod indicators;
pub mod periods;
pub mod prokers;
pub mod reports;
pub mod users;

pub use auth::AuthService;
pub use divisions::DivisionService;
pub use evaluations::EvaluationService;
pub use events::EventService;
pub use indicators::IndicatorService;
pub use periods::PeriodService;
pub use prokers::ProkerService;
pub use reports::ReportService;
pub use users::UserService;
