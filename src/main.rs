use clap::Parser;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cafe_order_rs::cli::{Cli, Command};
use cafe_order_rs::error::{CafeError, Result};
use cafe_order_rs::interface::{
    collect_order, display_menu, display_receipt, display_stats, prompt_yes_no,
};
use cafe_order_rs::menu::{parse_add_on, AddOn, BaseDrink, BeverageExt, DrinkKind};
use cafe_order_rs::shop::{
    load_config, load_history, next_order_number, save_history, write_report_csv, CoffeeShop,
    DailyStats, ShopConfig,
};
use cafe_order_rs::simulation::simulate_orders;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ShopConfig::default(),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(config, &cli.history),
        Command::Menu => {
            display_menu(&config.name);
            Ok(())
        }
        Command::Order {
            customer,
            drink,
            size,
            add_ons,
            complete,
        } => cmd_order(config, &cli.history, &customer, &drink, &size, &add_ons, complete),
        Command::Report { csv } => cmd_report(&config, &cli.history, csv.as_deref()),
        Command::Simulate { orders, seed } => cmd_simulate(config, orders, seed),
    }
}

/// Take orders at the counter until the barista stops.
fn cmd_interactive(config: ShopConfig, history_path: &str) -> Result<()> {
    let mut history = load_history(history_path)?;
    let mut shop = CoffeeShop::starting_at(config, next_order_number(&history));
    if !shop.is_open() {
        return Err(CafeError::ShopClosed);
    }

    display_menu(shop.name());

    if let Err(e) = serve_counter(&mut shop) {
        if !shop.is_empty() {
            history.extend(shop.records());
            save_history(history_path, &history)?;
            warn!("saved {} orders before stopping", shop.len());
        }
        return Err(e);
    }

    shop.close();
    display_stats(shop.name(), &shop.daily_stats());

    if prompt_yes_no("Save orders to history?", true)? {
        history.extend(shop.records());
        save_history(history_path, &history)?;
        println!("Order history saved.");
    }

    Ok(())
}

/// Order loop. A mistyped or rejected order is reported and taken again.
fn serve_counter(shop: &mut CoffeeShop) -> Result<()> {
    loop {
        if let Err(e) = take_order(shop) {
            if !e.is_recoverable() {
                return Err(e);
            }
            eprintln!("Error: {}", e);
            continue;
        }

        if !prompt_yes_no("Take another order?", true)? {
            return Ok(());
        }
    }
}

fn take_order(shop: &mut CoffeeShop) -> Result<()> {
    let (customer, beverage) = collect_order()?;
    let number = shop.place_order(&customer, beverage)?;

    if let Some(order) = shop.get_order(number) {
        display_receipt(order, &shop.receipt(number)?);
    }

    if prompt_yes_no("Mark order as completed?", true)? {
        shop.complete_order(number)?;
    }
    Ok(())
}

/// Place one order described by command-line flags.
fn cmd_order(
    config: ShopConfig,
    history_path: &str,
    customer: &str,
    drink: &str,
    size: &str,
    add_ons: &[String],
    complete: bool,
) -> Result<()> {
    let kind: DrinkKind = drink.parse()?;
    let add_ons: Vec<AddOn> = add_ons
        .iter()
        .map(|request| parse_add_on(request))
        .collect::<Result<_>>()?;

    let mut beverage = BaseDrink::with_size_name(kind, size).boxed();
    for add_on in add_ons {
        beverage = beverage.with(add_on);
    }

    let mut history = load_history(history_path)?;
    let mut shop = CoffeeShop::starting_at(config, next_order_number(&history));

    let number = shop.place_order(customer, beverage)?;
    if complete {
        shop.complete_order(number)?;
    }

    let order = shop
        .get_order(number)
        .ok_or(CafeError::OrderNotFound(number))?;
    display_receipt(order, &shop.receipt(number)?);

    history.extend(shop.records());
    save_history(history_path, &history)?;
    Ok(())
}

/// Rebuild the report from saved history.
fn cmd_report(config: &ShopConfig, history_path: &str, csv: Option<&str>) -> Result<()> {
    let history = load_history(history_path)?;
    if history.is_empty() {
        println!("No order history found at {}", history_path);
        return Ok(());
    }

    display_stats(&config.name, &DailyStats::from_records(&history));

    if let Some(path) = csv {
        write_report_csv(path, &history)?;
        println!("Wrote {} orders to {}", history.len(), path);
    }

    Ok(())
}

/// Run a seeded day of random orders.
fn cmd_simulate(config: ShopConfig, orders: usize, seed: u64) -> Result<()> {
    let mut shop = CoffeeShop::new(config);

    let mut rng = StdRng::seed_from_u64(seed);
    simulate_orders(&mut shop, orders, &mut rng)?;
    shop.close();

    println!("Simulated {} orders (seed {})", orders, seed);
    display_stats(shop.name(), &shop.daily_stats());
    Ok(())
}
