use crate::models::Size;

/// One selectable option of an add-on catalog.
///
/// Costs, calories and prep minutes are per unit; the add-on's quantity or
/// intensity decides how many units it contributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub cost: f64,
    pub calories: u32,
    pub prep_minutes: u32,
}

const fn entry(name: &'static str, cost: f64, calories: u32, prep_minutes: u32) -> CatalogEntry {
    CatalogEntry {
        name,
        cost,
        calories,
        prep_minutes,
    }
}

/// Fixed recipe of a base drink.
#[derive(Debug)]
pub struct DrinkProfile {
    pub name: &'static str,
    /// Size to price. Sizes missing here are charged the medium price.
    pub prices: &'static [(Size, f64)],
    pub calories: u32,
    pub prep_minutes: u32,
    pub ingredients: &'static [&'static str],
}

// ─────────────────────────────────────────────────────────────────────────────
// Shop defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Flat sales tax applied to every receipt.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

pub const DEFAULT_SHOP_NAME: &str = "Corner Café";

/// Default file for the persisted order history.
pub const DEFAULT_HISTORY_FILE: &str = "order_history.json";

// ─────────────────────────────────────────────────────────────────────────────
// Quantity bounds
// ─────────────────────────────────────────────────────────────────────────────

pub const SYRUP_MIN_PUMPS: u32 = 1;
pub const SYRUP_MAX_PUMPS: u32 = 6;

pub const MIN_EXTRA_SHOTS: u32 = 1;
pub const MAX_EXTRA_SHOTS: u32 = 4;

/// Bounds shared by flavor intensity and whipped cream amount.
pub const MIN_INTENSITY: f64 = 0.5;
pub const MAX_INTENSITY: f64 = 2.0;

/// Intensity at or above which a flavor reads as "Strong" and cream as "Extra".
pub const STRONG_INTENSITY: f64 = 1.5;

/// Minimum Jaro-Winkler score for a fuzzy catalog match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

// ─────────────────────────────────────────────────────────────────────────────
// Base drinks
// ─────────────────────────────────────────────────────────────────────────────

pub static PLAIN_COFFEE: DrinkProfile = DrinkProfile {
    name: "Plain Coffee",
    prices: &[
        (Size::Small, 2.50),
        (Size::Medium, 3.00),
        (Size::Large, 3.50),
        (Size::ExtraLarge, 4.00),
    ],
    calories: 5,
    prep_minutes: 3,
    ingredients: &["Coffee beans", "Hot water"],
};

/// Espresso has no extra large cup; it is charged at the medium price.
pub static ESPRESSO: DrinkProfile = DrinkProfile {
    name: "Espresso",
    prices: &[(Size::Small, 2.00), (Size::Medium, 2.50), (Size::Large, 3.00)],
    calories: 3,
    prep_minutes: 2,
    ingredients: &["Espresso beans", "Hot water"],
};

pub static CAPPUCCINO: DrinkProfile = DrinkProfile {
    name: "Cappuccino",
    prices: &[
        (Size::Small, 3.50),
        (Size::Medium, 4.00),
        (Size::Large, 4.50),
        (Size::ExtraLarge, 5.00),
    ],
    calories: 80,
    prep_minutes: 5,
    ingredients: &["Espresso", "Steamed milk", "Milk foam"],
};

// ─────────────────────────────────────────────────────────────────────────────
// Add-on catalogs, indexed by the matching option enum in `catalog`
// ─────────────────────────────────────────────────────────────────────────────

pub static MILK_CATALOG: [CatalogEntry; 6] = [
    entry("Whole", 0.50, 40, 1),
    entry("Skim", 0.50, 25, 1),
    entry("Almond", 0.75, 15, 1),
    entry("Soy", 0.75, 30, 1),
    entry("Oat", 0.80, 35, 1),
    entry("Coconut", 0.85, 45, 1),
];

pub static SUGAR_CATALOG: [CatalogEntry; 6] = [
    entry("White Sugar", 0.10, 16, 1),
    entry("Brown Sugar", 0.15, 17, 1),
    entry("Raw Sugar", 0.20, 18, 1),
    entry("Honey", 0.25, 21, 1),
    entry("Stevia", 0.15, 0, 1),
    entry("Agave", 0.30, 20, 1),
];

pub static FLAVOR_CATALOG: [CatalogEntry; 6] = [
    entry("Vanilla", 0.60, 15, 1),
    entry("Caramel", 0.60, 20, 1),
    entry("Hazelnut", 0.65, 18, 1),
    entry("Cinnamon", 0.40, 6, 1),
    entry("Mocha", 0.75, 25, 1),
    entry("Peppermint", 0.55, 12, 1),
];

pub static SYRUP_CATALOG: [CatalogEntry; 6] = [
    entry("Simple", 0.30, 20, 1),
    entry("Vanilla", 0.40, 25, 1),
    entry("Caramel", 0.40, 30, 1),
    entry("Chocolate", 0.45, 35, 1),
    entry("Maple", 0.50, 40, 1),
    entry("Lavender", 0.55, 22, 1),
];

pub static SHOT_CATALOG: [CatalogEntry; 5] = [
    entry("Regular", 0.75, 1, 2),
    entry("Ristretto", 0.85, 2, 3),
    entry("Lungo", 0.80, 3, 3),
    entry("Decaf", 0.75, 1, 2),
    entry("Blonde", 0.90, 2, 2),
];

pub static CREAM_CATALOG: [CatalogEntry; 5] = [
    entry("Classic", 0.50, 50, 1),
    entry("Low-Fat", 0.40, 30, 1),
    entry("Vanilla", 0.60, 60, 1),
    entry("Chocolate", 0.65, 70, 1),
    entry("Coconut", 0.70, 55, 1),
];
