use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::cart::dto::{CartLineDto, CartSummaryDto};
use crate::core::command::{Command, CommandError};

pub struct GetCartCommand {
    cart_service: Arc<dyn CartService>,
}

impl GetCartCommand {
    pub fn new(cart_service: Arc<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GetCartCommandRequest {}


#[derive(Debug, Serialize)]
pub struct GetCartCommandResponse {
    pub summary: CartSummaryDto,
    pub lines: Vec<CartLineDto>,
}

#[async_trait]
impl Command<GetCartCommandRequest, GetCartCommandResponse> for GetCartCommand {
    async fn execute(&self, _req: GetCartCommandRequest) -> Result<GetCartCommandResponse, CommandError> {
        let summary = self.cart_service.summary().await?;
        let lines = self.cart_service.lines().await?;
        Ok(GetCartCommandResponse { summary, lines })
    }
}
