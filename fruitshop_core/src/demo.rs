//! The fixed demonstration sequences.
//!
//! Pure functions returning values; the CLI decides how to render them.

use crate::error::ShopError;
use crate::fruit::{Cherry, Damson, Lettuce, Melon};
use crate::receipt::{SaleLine, unit_line, weigh_line};
use fruitshop_traits::{ColorPrinter, DeviceAction, MonoPrinter, MultiFunction};

/// Quantities used by the standing order. Defaults reproduce the fixed
/// demonstration sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoQuantities {
    pub cherry_kilos: f64,
    pub melon_units: f64,
    pub damson_kilos: f64,
    pub lettuce_units: f64,
}

impl Default for DemoQuantities {
    fn default() -> Self {
        Self {
            cherry_kilos: 2.5,
            melon_units: 2.0,
            damson_kilos: 2.5,
            lettuce_units: 2.0,
        }
    }
}

/// The four sale lines of the demonstration, in fixed order.
pub fn standing_order(q: &DemoQuantities) -> Result<Vec<SaleLine>, ShopError> {
    tracing::debug!(?q, "pricing standing order");
    Ok(vec![
        weigh_line("cherry", &Cherry, q.cherry_kilos)?,
        unit_line("melon", &Melon, q.melon_units)?,
        weigh_line("damson", &Damson, q.damson_kilos)?,
        unit_line("lettuce", &Lettuce, q.lettuce_units)?,
    ])
}

/// One job on each dedicated printer: mono first, then color.
pub fn dedicated_jobs(
    mono: &impl MonoPrinter,
    color: &impl ColorPrinter,
) -> Vec<DeviceAction> {
    vec![mono.print_black_and_white(), color.print_color()]
}

/// Exercise every capability of a multifunction device once, in the
/// demonstration's order: color, black and white, scan, fax.
pub fn multifunction_sequence(dev: &impl MultiFunction) -> Vec<DeviceAction> {
    vec![
        dev.print_color(),
        dev.print_black_and_white(),
        dev.scan(),
        dev.send_fax(),
    ]
}
