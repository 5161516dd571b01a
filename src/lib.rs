//! A small bookshop storefront: a compiled-in catalog that can be searched and
//! filtered by category, and a single shopping cart whose per-title quantity is
//! capped by the catalog stock. The page is rendered on the server and served by axum.

pub mod books;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod storefront;
pub mod utils;
