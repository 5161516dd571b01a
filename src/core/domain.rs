use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_STORE_NAME: &str = "Book Store";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

// Configuration abstracts config options for the storefront
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub store_name: String,
    pub bind_addr: String,
}

impl Configuration {
    pub fn new(store_name: &str) -> Self {
        Configuration {
            store_name: store_name.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    // BOOKSHOP_NAME and BOOKSHOP_ADDR override the defaults
    pub fn from_env() -> Self {
        let store_name = std::env::var("BOOKSHOP_NAME").unwrap_or_else(|_| DEFAULT_STORE_NAME.to_string());
        let mut config = Configuration::new(store_name.as_str());
        if let Ok(addr) = std::env::var("BOOKSHOP_ADDR") {
            config.bind_addr = addr;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, DEFAULT_BIND_ADDR};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.store_name.as_str());
        assert_eq!(DEFAULT_BIND_ADDR, config.bind_addr.as_str());
    }
}
