pub mod order;
pub mod size;

pub use order::{Order, OrderRecord, Receipt};
pub use size::Size;
