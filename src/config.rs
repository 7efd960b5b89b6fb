//! Application-level configuration constants.

// Auth behavior
pub const SIGN_IN_DELAY_MS: u32 = 1_500;
pub const MIN_PASSWORD_LEN: usize = 6;

// Market limits
pub const MAX_PERCENTAGE: f64 = 100.0;

// Keys swallowed by numeric inputs (minus sign and exponent marker)
pub const SUPPRESSED_NUMBER_KEYS: [&str; 3] = ["-", "e", "E"];

// Integration points, not wired to a transport yet
pub const SIGN_IN_ENDPOINT: &str = "/api/auth/signin";
pub const SIGN_UP_ENDPOINT: &str = "/api/auth/signup";
pub const CONFIG_ENDPOINT: &str = "/api/config";
