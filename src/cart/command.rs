pub mod add_to_cart_cmd;
pub mod get_cart_cmd;
