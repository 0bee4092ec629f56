//! Validated sale lines.
//!
//! The capability traits stay unchecked; quantity validation happens once
//! here, where numbers enter from the outside (CLI arguments, config).

use crate::error::ShopError;
use fruitshop_traits::{UnitPriced, WeighPriced};
use serde::Serialize;
use std::fmt;

/// Which selling strategy priced a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoldBy {
    Kilo,
    Unit,
}

/// One priced line of a sale: item name, the fixed unit price, the
/// validated quantity, and the computed total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleLine {
    pub item: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub sold_by: SoldBy,
    pub total: f64,
}

impl fmt::Display for SaleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sold_by {
            SoldBy::Kilo => write!(
                f,
                "{}: {:.2} per kilo, {:.2} kg, total {:.2}",
                self.item, self.unit_price, self.quantity, self.total
            ),
            SoldBy::Unit => write!(
                f,
                "{}: {:.2} per unit, {} units, total {:.2}",
                self.item, self.unit_price, self.quantity, self.total
            ),
        }
    }
}

fn check_quantity(q: f64) -> Result<f64, ShopError> {
    if !q.is_finite() || q < 0.0 {
        return Err(ShopError::InvalidQuantity(q));
    }
    Ok(q)
}

/// Price a weigh-sold item for the given kilos.
pub fn weigh_line(
    item: &str,
    fruit: &impl WeighPriced,
    kilos: f64,
) -> Result<SaleLine, ShopError> {
    let kilos = check_quantity(kilos)?;
    Ok(SaleLine {
        item: item.to_string(),
        unit_price: fruit.unit_price(),
        quantity: kilos,
        sold_by: SoldBy::Kilo,
        total: fruit.total_by_kilo(kilos),
    })
}

/// Price a unit-sold item for the given count.
pub fn unit_line(
    item: &str,
    fruit: &impl UnitPriced,
    units: f64,
) -> Result<SaleLine, ShopError> {
    let units = check_quantity(units)?;
    Ok(SaleLine {
        item: item.to_string(),
        unit_price: fruit.unit_price(),
        quantity: units,
        sold_by: SoldBy::Unit,
        total: fruit.total_by_unit(units),
    })
}
