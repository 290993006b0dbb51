pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod shop;
pub mod simulation;

pub use error::{CafeError, Result};
pub use menu::{AddOn, Attachment, BaseDrink, Beverage, BeverageExt, DrinkKind};
pub use models::{Order, OrderRecord, Receipt, Size};
