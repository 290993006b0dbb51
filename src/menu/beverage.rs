use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CafeError;
use crate::menu::constants::{CAPPUCCINO, DrinkProfile, ESPRESSO, PLAIN_COFFEE};
use crate::models::Size;

/// The attribute surface shared by base drinks and every add-on wrapped
/// around them.
pub trait Beverage: fmt::Debug {
    fn description(&self) -> String;

    fn cost(&self) -> f64;

    fn size(&self) -> Size;

    /// Change the cup size. Wrappers forward this down to the base drink.
    fn set_size(&mut self, size: Size);

    fn ingredients(&self) -> Vec<String>;

    /// Preparation time in minutes.
    fn preparation_time(&self) -> u32;

    fn calories(&self) -> u32;

    fn is_available(&self) -> bool;
}

/// Base drink types on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrinkKind {
    PlainCoffee,
    Espresso,
    Cappuccino,
}

impl DrinkKind {
    pub const ALL: [DrinkKind; 3] = [
        DrinkKind::PlainCoffee,
        DrinkKind::Espresso,
        DrinkKind::Cappuccino,
    ];

    pub fn profile(&self) -> &'static DrinkProfile {
        match self {
            DrinkKind::PlainCoffee => &PLAIN_COFFEE,
            DrinkKind::Espresso => &ESPRESSO,
            DrinkKind::Cappuccino => &CAPPUCCINO,
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }

    /// Price of this drink for a size, or the medium price when the size
    /// isn't offered.
    pub fn price(&self, size: Size) -> f64 {
        let prices = self.profile().prices;
        prices
            .iter()
            .find(|(s, _)| *s == size)
            .or_else(|| prices.iter().find(|(s, _)| *s == Size::Medium))
            .map(|(_, price)| *price)
            .unwrap_or(0.0)
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrinkKind {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "plaincoffee" | "coffee" | "plain" => Ok(DrinkKind::PlainCoffee),
            "espresso" => Ok(DrinkKind::Espresso),
            "cappuccino" => Ok(DrinkKind::Cappuccino),
            _ => Err(CafeError::UnknownDrink(s.to_string())),
        }
    }
}

/// An undecorated drink: the leaf of every wrap chain.
#[derive(Debug, Clone)]
pub struct BaseDrink {
    kind: DrinkKind,
    size: Size,
    available: bool,
}

impl BaseDrink {
    pub fn new(kind: DrinkKind, size: Size) -> Self {
        Self {
            kind,
            size,
            available: true,
        }
    }

    pub fn plain_coffee(size: Size) -> Self {
        Self::new(DrinkKind::PlainCoffee, size)
    }

    pub fn espresso(size: Size) -> Self {
        Self::new(DrinkKind::Espresso, size)
    }

    pub fn cappuccino(size: Size) -> Self {
        Self::new(DrinkKind::Cappuccino, size)
    }

    /// Build from a free-text size; unrecognized sizes become medium.
    pub fn with_size_name(kind: DrinkKind, size: &str) -> Self {
        Self::new(kind, Size::from_name_or_default(size))
    }

    pub fn kind(&self) -> DrinkKind {
        self.kind
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn boxed(self) -> Box<dyn Beverage> {
        Box::new(self)
    }
}

impl Beverage for BaseDrink {
    fn description(&self) -> String {
        format!("{} {}", self.size, self.kind.name())
    }

    fn cost(&self) -> f64 {
        self.kind.price(self.size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn ingredients(&self) -> Vec<String> {
        self.kind
            .profile()
            .ingredients
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    fn preparation_time(&self) -> u32 {
        self.kind.profile().prep_minutes
    }

    fn calories(&self) -> u32 {
        self.kind.profile().calories
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_coffee_medium() {
        let coffee = BaseDrink::plain_coffee(Size::Medium);
        assert!((coffee.cost() - 3.00).abs() < 0.001);
        assert_eq!(coffee.calories(), 5);
        assert_eq!(coffee.preparation_time(), 3);
        assert_eq!(coffee.description(), "Medium Plain Coffee");
        assert!(coffee.is_available());
    }

    #[test]
    fn test_price_tables() {
        assert!((DrinkKind::PlainCoffee.price(Size::Small) - 2.50).abs() < 0.001);
        assert!((DrinkKind::Espresso.price(Size::Small) - 2.00).abs() < 0.001);
        assert!((DrinkKind::Cappuccino.price(Size::ExtraLarge) - 5.00).abs() < 0.001);
    }

    #[test]
    fn test_missing_size_uses_medium_price() {
        let espresso = BaseDrink::espresso(Size::ExtraLarge);
        assert!((espresso.cost() - DrinkKind::Espresso.price(Size::Medium)).abs() < 0.001);
    }

    #[test]
    fn test_unknown_size_name_uses_medium() {
        let coffee = BaseDrink::with_size_name(DrinkKind::PlainCoffee, "gigantic");
        assert_eq!(coffee.size(), Size::Medium);
        assert!((coffee.cost() - 3.00).abs() < 0.001);

        let coffee = BaseDrink::with_size_name(DrinkKind::PlainCoffee, "LARGE");
        assert!((coffee.cost() - 3.50).abs() < 0.001);
    }

    #[test]
    fn test_set_size_changes_cost() {
        let mut coffee = BaseDrink::cappuccino(Size::Small);
        assert!((coffee.cost() - 3.50).abs() < 0.001);
        coffee.set_size(Size::Large);
        assert!((coffee.cost() - 4.50).abs() < 0.001);
        // Size doesn't affect calories or prep time
        assert_eq!(coffee.calories(), 80);
        assert_eq!(coffee.preparation_time(), 5);
    }

    #[test]
    fn test_ingredients_are_a_copy() {
        let coffee = BaseDrink::cappuccino(Size::Medium);
        let mut ingredients = coffee.ingredients();
        ingredients.push("Ketchup".to_string());
        ingredients[0] = "Tea".to_string();
        assert_eq!(coffee.ingredients(), vec!["Espresso", "Steamed milk", "Milk foam"]);
    }

    #[test]
    fn test_drink_kind_parse() {
        assert_eq!("Plain Coffee".parse::<DrinkKind>().unwrap(), DrinkKind::PlainCoffee);
        assert_eq!("ESPRESSO".parse::<DrinkKind>().unwrap(), DrinkKind::Espresso);
        assert!(matches!(
            "latte".parse::<DrinkKind>(),
            Err(CafeError::UnknownDrink(_))
        ));
    }
}
