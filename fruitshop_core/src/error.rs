use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShopError {
    #[error("quantity must be a non-negative finite number, got {0}")]
    InvalidQuantity(f64),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
