use crate::menu::{
    CatalogEntry, CatalogOption, CreamKind, DrinkKind, FlavorKind, MilkKind, ShotKind, SugarKind,
    SyrupKind,
};
use crate::models::{Order, Receipt, Size};
use crate::shop::DailyStats;

fn display_catalog<T: CatalogOption>(title: &str, unit: &str) {
    println!("--- {} ---", title);
    let entries: Vec<&CatalogEntry> = T::ALL.iter().map(|o| o.entry()).collect();
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);

    for entry in entries {
        println!(
            "  {:<width$}  ${:.2} {:<9} {:>3} cal  {} min",
            entry.name,
            entry.cost,
            unit,
            entry.calories,
            entry.prep_minutes,
            width = width
        );
    }
    println!();
}

/// Print drink prices and every add-on catalog.
pub fn display_menu(shop_name: &str) {
    println!();
    println!("=== {} Menu ===", shop_name);
    println!();

    let name_width = DrinkKind::ALL
        .iter()
        .map(|d| d.name().len())
        .max()
        .unwrap_or(12);

    print!("  {:<width$}", "", width = name_width);
    for size in Size::ALL {
        print!(" {:>11}", size.name());
    }
    println!("  {:>5}  {:>4}", "cal", "min");

    for drink in DrinkKind::ALL {
        print!("  {:<width$}", drink.name(), width = name_width);
        for size in Size::ALL {
            print!(" {:>11}", format!("${:.2}", drink.price(size)));
        }
        let profile = drink.profile();
        println!("  {:>5}  {:>4}", profile.calories, profile.prep_minutes);
    }
    println!();

    display_catalog::<MilkKind>("Milk", "");
    display_catalog::<SugarKind>("Sugar", "/ packet");
    display_catalog::<FlavorKind>("Flavor", "x strength");
    display_catalog::<SyrupKind>("Syrup", "/ pump");
    display_catalog::<ShotKind>("Extra shot", "/ shot");
    display_catalog::<CreamKind>("Whipped cream", "x amount");
}

/// Print an itemized receipt for one order.
pub fn display_receipt(order: &Order, receipt: &Receipt) {
    println!();
    println!("=== Receipt: Order #{} ===", order.number);
    println!("Customer: {}", order.customer);
    println!("Placed:   {}", order.placed_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", order.beverage.description());
    println!();

    for ingredient in order.beverage.ingredients() {
        println!("  - {}", ingredient);
    }

    println!();
    println!("Calories:  {}", order.beverage.calories());
    println!("Ready in:  {} min", order.beverage.preparation_time());
    println!();
    println!("Subtotal: {:>8}", format!("${:.2}", receipt.subtotal));
    println!("Tax:      {:>8}", format!("${:.2}", receipt.tax));
    println!("Total:    {:>8}", format!("${:.2}", receipt.total));
    println!();
}

/// Print the day's summary.
pub fn display_stats(shop_name: &str, stats: &DailyStats) {
    println!();
    println!("=== {} Daily Report ===", shop_name);
    println!();

    if stats.total_orders == 0 {
        println!("No orders yet.");
        println!();
        return;
    }

    println!("Orders:          {}", stats.total_orders);
    println!("Completed:       {}", stats.completed_orders);
    println!("Pending:         {}", stats.pending_orders());
    println!("Revenue:         ${:.2}", stats.revenue);
    println!("Tax collected:   ${:.2}", stats.tax_collected);
    println!("Average order:   ${:.2}", stats.average_order_value());
    println!("Calories served: {}", stats.total_calories);

    if let Some(size) = stats.most_popular_size() {
        println!("Popular size:    {}", size);
    }

    println!();
    println!("--- Orders by size ---");
    for (size, count) in &stats.size_counts {
        println!("  {:<11} {}", size.name(), count);
    }
    println!();
}
