//! Cost unit conversion
//!
//! Operators declare costs per million tokens; the API stores cost per token.

pub const TOKENS_PER_MILLION: f64 = 1_000_000.0;

pub fn per_million_to_per_token(cost: f64) -> f64 {
    cost / TOKENS_PER_MILLION
}

/// Rounded to 9 decimal places so a value read back compares equal to the
/// one declared
pub fn per_token_to_per_million(cost: f64) -> f64 {
    const SCALE: f64 = 1e9;
    (cost * TOKENS_PER_MILLION * SCALE).round() / SCALE
}
