/// Medrec system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inclusive age bounds accepted for a health report.
pub const AGE_MIN: f64 = 0.0;
pub const AGE_MAX: f64 = 120.0;

/// BMI upper bound. The lower bound is exclusive: a BMI of 0 is rejected.
pub const BMI_MAX: f64 = 80.0;

/// Smoking status recorded when the payload omits the field.
pub const DEFAULT_SMOKING_STATUS: &str = "unknown";

/// Username shape accepted at registration.
pub const USERNAME_PATTERN: &str = "^[A-Za-z0-9_.-]{3,32}$";

/// Default cap on search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;
