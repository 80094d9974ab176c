use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::{Confirm, Input, Select};

use crate::render::stars;
use bookmyseat_models::STAR_LEVELS;

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);

    if let Some(default_value) = default {
        input = input.default(default_value.to_string());
    }

    input.interact_text().map_err(|e| eyre!("Failed to read input: {}", e))
}

pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| eyre!("Failed to read confirmation: {}", e))
}

fn rating_items() -> Vec<String> {
    STAR_LEVELS
        .iter()
        .map(|&level| format!("{} ({})", stars(level), level))
        .collect()
}

/// Star picker, best rating first. Returns 1 through 5.
pub fn prompt_rating(prompt: &str) -> Result<u8> {
    let items = rating_items();

    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| eyre!("Failed to read rating: {}", e))?;

    STAR_LEVELS
        .get(index)
        .copied()
        .ok_or_else(|| eyre!("Invalid rating selection"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_items_best_first() {
        let items = rating_items();
        assert_eq!(items.len(), STAR_LEVELS.len());
        assert_eq!(items[0], format!("{} (5)", stars(5)));
        assert_eq!(items[4], format!("{} (1)", stars(1)));
    }
}
