use crate::config::{MAX_WEIGHT, MIN_WEIGHT};

/// Validation result with error message
pub type ValidationResult<T> = Result<T, &'static str>;

/// Validate a body weight typed by the user
///
/// Returns the weight in kilograms, or a message explaining why it's invalid.
pub fn validate_weight(input: &str) -> ValidationResult<u32> {
    let weight: u32 = input
        .trim()
        .parse()
        .map_err(|_| "Enter a valid weight (a whole number)")?;
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err("Weight must be between 30 and 200 kg");
    }
    Ok(weight)
}
