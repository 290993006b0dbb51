pub mod prompts;
pub mod render;

pub use prompts::{
    collect_order, prompt_add_on, prompt_customer_name, prompt_drink, prompt_size, prompt_yes_no,
};
pub use render::{display_menu, display_receipt, display_stats};
