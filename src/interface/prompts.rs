use dialoguer::{Confirm, Input, Select};

use crate::error::{CafeError, Result};
use crate::menu::{
    AddOn, BaseDrink, Beverage, BeverageExt, CatalogOption, CreamKind, DrinkKind, FlavorKind,
    MilkKind, ShotKind, SugarKind, SyrupKind,
};
use crate::models::Size;

const ADD_ON_CHOICES: [&str; 7] = [
    "Milk",
    "Sugar",
    "Flavor",
    "Syrup",
    "Extra shot",
    "Whipped cream",
    "Done",
];

/// Prompt for the customer's name.
pub fn prompt_customer_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Customer name")
        .interact_text()?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CafeError::InvalidInput("Customer name is required".to_string()));
    }
    Ok(name.to_string())
}

/// Prompt for a base drink.
pub fn prompt_drink() -> Result<DrinkKind> {
    let options: Vec<String> = DrinkKind::ALL
        .iter()
        .map(|d| format!("{} (from ${:.2})", d.name(), d.price(Size::Small)))
        .collect();

    let selection = Select::new()
        .with_prompt("Which drink?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(DrinkKind::ALL[selection])
}

/// Prompt for a cup size, showing the price for the chosen drink.
pub fn prompt_size(drink: DrinkKind) -> Result<Size> {
    let options: Vec<String> = Size::ALL
        .iter()
        .map(|s| format!("{} (${:.2})", s.name(), drink.price(*s)))
        .collect();

    let selection = Select::new()
        .with_prompt("Which size?")
        .items(&options)
        .default(1) // medium
        .interact()?;

    Ok(Size::ALL[selection])
}

fn prompt_option<T: CatalogOption>() -> Result<T> {
    let options: Vec<String> = T::ALL
        .iter()
        .map(|o| format!("{} (${:.2})", o.name(), o.entry().cost))
        .collect();

    let selection = Select::new()
        .with_prompt(format!("Which {}?", T::KIND))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(T::ALL[selection])
}

fn prompt_count(prompt: &str, default: i64) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| CafeError::InvalidInput("Invalid number".to_string()))
}

fn prompt_intensity(prompt: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default("1.0".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| CafeError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for one add-on, or `None` when the customer is done.
pub fn prompt_add_on() -> Result<Option<AddOn>> {
    let selection = Select::new()
        .with_prompt("Add something?")
        .items(&ADD_ON_CHOICES)
        .default(ADD_ON_CHOICES.len() - 1)
        .interact()?;

    let add_on = match selection {
        0 => AddOn::milk(prompt_option::<MilkKind>()?),
        1 => AddOn::sugar(
            prompt_option::<SugarKind>()?,
            prompt_count("How many packets?", 1)?,
        ),
        2 => AddOn::flavor(
            prompt_option::<FlavorKind>()?,
            prompt_intensity("Strength (0.5 - 2.0)")?,
        ),
        3 => AddOn::syrup(
            prompt_option::<SyrupKind>()?,
            prompt_count("How many pumps? (1 - 6)", 1)?,
        ),
        4 => AddOn::extra_shot(
            prompt_option::<ShotKind>()?,
            prompt_count("How many shots? (1 - 4)", 1)?,
        ),
        5 => AddOn::whipped_cream(
            prompt_option::<CreamKind>()?,
            prompt_intensity("Amount (0.5 - 2.0)")?,
        ),
        _ => return Ok(None),
    };

    Ok(Some(add_on))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the customer through building one drink.
pub fn collect_order() -> Result<(String, Box<dyn Beverage>)> {
    let customer = prompt_customer_name()?;
    let drink = prompt_drink()?;
    let size = prompt_size(drink)?;

    let mut beverage = BaseDrink::new(drink, size).boxed();
    while let Some(add_on) = prompt_add_on()? {
        beverage = beverage.with(add_on);
        println!("  {} (${:.2})", beverage.description(), beverage.cost());
    }

    Ok((customer, beverage))
}
