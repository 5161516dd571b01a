use std::sync::Arc;
use axum::http::StatusCode;
use crate::cart::factory::create_cart_service;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::ShopError;
use crate::gateway::GatewayPublisherVia;
use crate::storefront::domain::engine::StorefrontEngine;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub engine: Arc<StorefrontEngine>,
}

impl AppState {
    pub fn new(config: Configuration, via: GatewayPublisherVia) -> AppState {
        let engine = StorefrontEngine::new(&config,
                                           Arc::from(create_catalog_service()),
                                           Arc::from(create_cart_service(via)));
        AppState {
            config,
            engine: Arc::new(engine),
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

impl From<ShopError> for ServerError {
    fn from(err: ShopError) -> Self {
        ServerError::from(CommandError::from(err))
    }
}
