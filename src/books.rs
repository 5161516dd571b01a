pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

// Category tags offered by the storefront selector, in display order.
pub const CATEGORIES: [&str; 4] = ["fiction", "non-fiction", "science-fiction", "children"];
