mod config;
mod history;
mod manager;
mod stats;

pub use config::{load_config, ShopConfig};
pub use history::{load_history, next_order_number, save_history, write_report_csv};
pub use manager::CoffeeShop;
pub use stats::DailyStats;
