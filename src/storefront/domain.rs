pub mod engine;

use serde::{Deserialize, Serialize};
use crate::core::library::StockBand;

// StockStatus is the badge shown on a book card for its catalog stock.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StockStatus {
    pub band: StockBand,
    pub label: String,
}

impl StockStatus {
    pub fn tag(&self) -> &'static str {
        self.band.tag()
    }
}

/// Classifies a raw stock count: 0 is out of stock, 1 to 14 is low stock and
/// 15 or more is in stock.
pub fn stock_status(stock: u32) -> StockStatus {
    let band = StockBand::from_stock(stock);
    let label = match band {
        StockBand::OutOfStock => "Out of Stock".to_string(),
        StockBand::LowStock => format!("Low Stock ({})", stock),
        StockBand::InStock => format!("In Stock ({})", stock),
    };
    StockStatus { band, label }
}

/// Turns a hyphen-joined category tag into title-cased words,
/// e.g. `non-fiction` becomes `Non Fiction`.
pub fn format_category(category: &str) -> String {
    category.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use crate::core::library::StockBand;
    use crate::storefront::domain::{format_category, stock_status};

    #[tokio::test]
    async fn test_should_classify_stock_status() {
        let status = stock_status(0);
        assert_eq!(StockBand::OutOfStock, status.band);
        assert_eq!("Out of Stock", status.label.as_str());
        assert_eq!("out-of-stock", status.tag());

        let status = stock_status(14);
        assert_eq!(StockBand::LowStock, status.band);
        assert_eq!("Low Stock (14)", status.label.as_str());
        assert_eq!("low-stock", status.tag());

        let status = stock_status(15);
        assert_eq!(StockBand::InStock, status.band);
        assert_eq!("In Stock (15)", status.label.as_str());
        assert_eq!("in-stock", status.tag());
    }

    #[tokio::test]
    async fn test_should_format_category() {
        assert_eq!("Science Fiction", format_category("science-fiction"));
        assert_eq!("Fiction", format_category("fiction"));
        assert_eq!("Non Fiction", format_category("non-fiction"));
        assert_eq!("", format_category(""));
        assert_eq!("A  B", format_category("a--b"));
    }
}
