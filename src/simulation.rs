use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::menu::{
    AddOn, BaseDrink, Beverage, BeverageExt, CatalogOption, CreamKind, DrinkKind, FlavorKind,
    MilkKind, ShotKind, SugarKind, SyrupKind,
};
use crate::models::Size;
use crate::shop::CoffeeShop;

const CUSTOMERS: [&str; 8] = [
    "Alex", "Blake", "Casey", "Drew", "Emery", "Finley", "Harper", "Jordan",
];

/// Most add-ons a simulated drink can carry.
pub const MAX_RANDOM_ADD_ONS: usize = 3;

/// Share of simulated orders marked completed.
pub const COMPLETION_RATE: f64 = 0.9;

fn pick<T: CatalogOption>(rng: &mut impl Rng) -> T {
    *T::ALL.choose(rng).unwrap_or(&T::ALL[0])
}

/// Draw one random add-on with in-range quantities.
pub fn random_add_on(rng: &mut impl Rng) -> AddOn {
    match rng.gen_range(0..6) {
        0 => AddOn::milk(pick::<MilkKind>(rng)),
        1 => AddOn::sugar(pick::<SugarKind>(rng), rng.gen_range(0..=3)),
        2 => AddOn::flavor(pick::<FlavorKind>(rng), rng.gen_range(0.5..=2.0)),
        3 => AddOn::syrup(pick::<SyrupKind>(rng), rng.gen_range(1..=6)),
        4 => AddOn::extra_shot(pick::<ShotKind>(rng), rng.gen_range(1..=4)),
        _ => AddOn::whipped_cream(pick::<CreamKind>(rng), rng.gen_range(0.5..=2.0)),
    }
}

/// Build a random drink: any base, any size, up to `MAX_RANDOM_ADD_ONS` add-ons.
pub fn random_beverage(rng: &mut impl Rng) -> Box<dyn Beverage> {
    let kind = DrinkKind::ALL[rng.gen_range(0..DrinkKind::ALL.len())];
    let size = Size::ALL[rng.gen_range(0..Size::ALL.len())];

    let mut beverage = BaseDrink::new(kind, size).boxed();
    for _ in 0..rng.gen_range(0..=MAX_RANDOM_ADD_ONS) {
        beverage = beverage.with(random_add_on(rng));
    }
    beverage
}

/// Place `count` random orders on the shop, completing most of them.
///
/// Returns the numbers of the placed orders.
pub fn simulate_orders(shop: &mut CoffeeShop, count: usize, rng: &mut impl Rng) -> Result<Vec<u32>> {
    let mut numbers = Vec::with_capacity(count);

    for _ in 0..count {
        let customer = CUSTOMERS[rng.gen_range(0..CUSTOMERS.len())];
        let beverage = random_beverage(rng);
        let number = shop.place_order(customer, beverage)?;

        if rng.gen_bool(COMPLETION_RATE) {
            shop.complete_order(number)?;
        }
        debug!("simulated order #{}", number);
        numbers.push(number);
    }

    Ok(numbers)
}
