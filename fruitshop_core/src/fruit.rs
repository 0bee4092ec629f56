//! Concrete items on the shelf.
//!
//! Each type declares conformance to exactly one of the two selling
//! strategies. There is no per-unit total on `Cherry` and no per-kilo
//! total on `Melon`; the unsupported operation does not exist on the type.

use fruitshop_traits::{Priced, UnitPriced, WeighPriced};

/// Sold by the kilo at 100.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cherry;

impl Priced for Cherry {
    fn unit_price(&self) -> f64 {
        100.0
    }
}

impl WeighPriced for Cherry {}

/// Sold by the kilo at 200.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct Damson;

impl Priced for Damson {
    fn unit_price(&self) -> f64 {
        200.0
    }
}

impl WeighPriced for Damson {}

/// Sold by the piece at 200.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct Melon;

impl Priced for Melon {
    fn unit_price(&self) -> f64 {
        200.0
    }
}

impl UnitPriced for Melon {}

/// Sold by the piece at 100.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lettuce;

impl Priced for Lettuce {
    fn unit_price(&self) -> f64 {
        100.0
    }
}

impl UnitPriced for Lettuce {}
