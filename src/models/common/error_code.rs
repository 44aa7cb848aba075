// Business error codes carried in every API response.
// Grouped by the HTTP status family they are normally paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx - validation
    BadRequest = 40000,
    InvalidScore = 40001,
    InvalidIndicator = 40002,
    InvalidPeriodYears = 40003,
    ProkerPeriodMismatch = 40004,

    // 401xx - authentication
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx - authorization
    Forbidden = 40300,

    // 404xx - missing resources
    NotFound = 40400,
    UserNotFound = 40401,
    PeriodNotFound = 40402,
    DivisionNotFound = 40403,
    ProkerNotFound = 40404,
    IndicatorNotFound = 40405,
    EventNotFound = 40406,
    EvaluationNotFound = 40407,
    PanitiaNotFound = 40408,

    // 409xx - state conflicts
    AlreadyExists = 40900,
    UserAlreadyExists = 40901,
    EventLocked = 40902,
    EventNotOpen = 40903,
    AlreadySubmitted = 40904,
    IndicatorInUse = 40905,
    CanNotDeleteCurrentUser = 40906,
    StillReferenced = 40907,

    // 429xx - throttling
    RateLimitExceeded = 42900,

    // 500xx - infrastructure
    InternalServerError = 50000,
}
