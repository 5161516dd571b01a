use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn stock(&self) -> u32;
    fn category(&self) -> &str;
    fn price_cents(&self) -> u64;
}
