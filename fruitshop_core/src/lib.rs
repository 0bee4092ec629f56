#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Shop domain logic (device-agnostic).
//!
//! This crate prices items and sequences the demonstration. All device
//! interactions go through the capability traits in `fruitshop_traits`,
//! so nothing here knows which concrete printer is plugged in.
//!
//! ## Architecture
//!
//! - **Fruit**: concrete items, each conforming to exactly one selling
//!   strategy (`fruit` module)
//! - **Receipt**: validated sale lines with computed totals (`receipt`
//!   module)
//! - **Demo**: the fixed demonstration sequences as pure functions
//!   returning values; rendering is the caller's job (`demo` module)
//!
//! The segregation rule runs through everything: an item sold by the kilo
//! has no per-unit total method to misuse, and a consumer that needs a
//! scanner never has to accept a fax machine. A single fat interface
//! carrying every method would force each type to stub out operations it
//! cannot semantically perform; splitting the capabilities makes those
//! states unrepresentable.

pub mod demo;
pub mod error;
pub mod fruit;
pub mod receipt;

pub use demo::{DemoQuantities, dedicated_jobs, multifunction_sequence, standing_order};
pub use error::ShopError;
pub use fruit::{Cherry, Damson, Lettuce, Melon};
pub use receipt::{SaleLine, SoldBy, unit_line, weigh_line};
