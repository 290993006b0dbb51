use thiserror::Error;

#[derive(Debug, Error)]
pub enum CafeError {
    #[error("The shop is closed")]
    ShopClosed,

    #[error("Beverage not available: {0}")]
    BeverageUnavailable(String),

    #[error("Order not found: #{0}")]
    OrderNotFound(u32),

    #[error("Unknown drink: {0}")]
    UnknownDrink(String),

    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    #[error("Unknown {kind} option: {name}")]
    UnknownVariant { kind: String, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CafeError>;

impl CafeError {
    /// Whether the counter can move on to the next order after this error.
    ///
    /// Bad input and rejected orders are; failures of the terminal or of the
    /// files behind the shop are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CafeError::Io(_) | CafeError::Json(_) | CafeError::Prompt(_) | CafeError::Csv(_)
        )
    }
}
