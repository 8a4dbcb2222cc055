use chrono::NaiveDate;
use dialoguer::{Input, Select};

use crate::error::{HydroError, Result};
use crate::models::{Plant, TrackerState};
use crate::validation::{ValidationResult, validate_weight};

/// Run the interactive first-run setup on the plain terminal.
///
/// Leaving the weight empty cancels setup. Cancelling the plant choice picks
/// the flower.
pub fn first_run(today: NaiveDate) -> Result<TrackerState> {
    println!("Welcome! Let's set up your daily water goal.");

    let weight = prompt_weight()?.ok_or(HydroError::SetupCancelled)?;
    let plant = prompt_plant()?;

    log::info!("First-run setup: weight {} kg, plant {}", weight, plant);
    Ok(TrackerState::new(weight, plant, today))
}

/// Interpret an answer to the weight prompt: empty means the user wants out
fn weight_answer(input: &str) -> ValidationResult<Option<u32>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    validate_weight(input).map(Some)
}

/// Prompt for body weight. Returns `None` if the user leaves it empty.
fn prompt_weight() -> Result<Option<u32>> {
    let input: String = Input::new()
        .with_prompt("Enter your weight in kg (leave empty to quit)")
        .allow_empty(true)
        .validate_with(|input: &String| -> ValidationResult<()> {
            weight_answer(input).map(|_| ())
        })
        .interact_text()?;

    weight_answer(&input).map_err(HydroError::InvalidWeight)
}

/// Prompt for the plant to grow
fn prompt_plant() -> Result<Plant> {
    let names: Vec<&str> = Plant::ALL.iter().map(Plant::as_str).collect();
    let choice = Select::new()
        .with_prompt("Choose your plant (Esc for flower)")
        .items(&names)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|i| Plant::ALL[i]).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_weight_answer_means_quit() {
        assert_eq!(weight_answer(""), Ok(None));
        assert_eq!(weight_answer("   "), Ok(None));
    }

    #[test]
    fn test_weight_answer_is_validated() {
        assert_eq!(weight_answer("65"), Ok(Some(65)));
        assert_eq!(
            weight_answer("12"),
            Err("Weight must be between 30 and 200 kg")
        );
        assert_eq!(
            weight_answer("heavy"),
            Err("Enter a valid weight (a whole number)")
        );
    }
}
