pub mod audit;
pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeDivisionIdI64, SafeEvaluationIdI64, SafeEventIdI64, SafeIDI64, SafeIndicatorIdI64,
    SafePeriodIdI64, SafeProkerIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
