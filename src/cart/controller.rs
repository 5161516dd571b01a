use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::cart::command::add_to_cart_cmd::{AddToCartCommand, AddToCartCommandRequest, AddToCartCommandResponse};
use crate::cart::command::get_cart_cmd::{GetCartCommand, GetCartCommandRequest, GetCartCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub async fn add_to_cart(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddToCartCommandResponse>, ServerError> {
    let req: AddToCartCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let cmd = AddToCartCommand::new(state.engine.catalog_service(), state.engine.cart_service());
    let res = cmd.execute(req).await?;
    Ok(Json(res))
}

pub async fn get_cart(
    State(state): State<AppState>) -> Result<Json<GetCartCommandResponse>, ServerError> {
    let res = GetCartCommand::new(state.engine.cart_service()).execute(GetCartCommandRequest::default()).await?;
    Ok(Json(res))
}
