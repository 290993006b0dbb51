pub mod attachment;
pub mod beverage;
pub mod catalog;
pub mod constants;
pub mod request;

pub use attachment::{AddOn, Attachment, BeverageExt};
pub use beverage::{BaseDrink, Beverage, DrinkKind};
pub use catalog::{CatalogOption, CreamKind, FlavorKind, MilkKind, ShotKind, SugarKind, SyrupKind};
pub use constants::*;
pub use request::parse_add_on;
