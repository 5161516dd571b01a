use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// Stock at or above this count is considered comfortably in stock.
pub const LOW_STOCK_THRESHOLD: u32 = 15;

#[derive(Debug)]
pub enum ShopError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl ShopError {
    pub fn not_found(message: &str) -> ShopError {
        ShopError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> ShopError {
        ShopError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> ShopError {
        ShopError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> ShopError {
        ShopError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for ShopError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::NotFound { message } => {
                write!(f, "{}", message)
            }
            ShopError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            ShopError::Serialization { message } => {
                write!(f, "{}", message)
            }
            ShopError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for ShopError {}

/// A specialized Result type for the shop services.
pub type ShopResult<T> = Result<T, ShopError>;

// StockBand classifies the raw stock count of a book.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum StockBand {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockBand {
    pub fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            StockBand::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockBand::LowStock
        } else {
            StockBand::InStock
        }
    }

    // css tag used by the listing
    pub fn tag(&self) -> &'static str {
        match self {
            StockBand::OutOfStock => "out-of-stock",
            StockBand::LowStock => "low-stock",
            StockBand::InStock => "in-stock",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StockBand::OutOfStock => "❌",
            StockBand::LowStock => "⚠️",
            StockBand::InStock => "✅",
        }
    }
}

impl From<String> for StockBand {
    fn from(s: String) -> Self {
        match s.as_str() {
            "out-of-stock" => StockBand::OutOfStock,
            "low-stock" => StockBand::LowStock,
            _ => StockBand::InStock,
        }
    }
}

impl Display for StockBand {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum AddToCartOutcome {
    Added,
    Incremented,
    Unchanged,
}

impl AddToCartOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, AddToCartOutcome::Unchanged)
    }
}

impl Display for AddToCartOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AddToCartOutcome::Added => write!(f, "Added"),
            AddToCartOutcome::Incremented => write!(f, "Incremented"),
            AddToCartOutcome::Unchanged => write!(f, "Unchanged"),
        }
    }
}
