// Renders an amount in cents with exactly two decimal places, e.g. 2849 -> "28.49".
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use crate::utils::money::format_price;

    #[tokio::test]
    async fn test_should_format_price() {
        assert_eq!("0.00", format_price(0));
        assert_eq!("0.05", format_price(5));
        assert_eq!("15.50", format_price(1550));
        assert_eq!("28.49", format_price(1299 + 1550));
        assert_eq!("1234.00", format_price(123400));
    }
}
