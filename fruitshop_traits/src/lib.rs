pub mod printing;

pub use printing::{ColorPrinter, DeviceAction, Fax, MonoPrinter, MultiFunction, Scanner};

/// An item with a fixed unit price.
///
/// The price is per kilo or per piece depending on which of the two
/// selling strategies the item also conforms to; `Priced` itself carries
/// no quantity semantics.
pub trait Priced {
    fn unit_price(&self) -> f64;
}

/// Items sold by weight. The total is weight times unit price; the default
/// body is the whole contract, so implementors normally only provide
/// `unit_price`.
pub trait WeighPriced: Priced {
    fn total_by_kilo(&self, kilos: f64) -> f64 {
        kilos * self.unit_price()
    }
}

/// Items sold by the piece. Counterpart of [`WeighPriced`]; an item type
/// conforms to exactly one of the two, never both.
pub trait UnitPriced: Priced {
    fn total_by_unit(&self, units: f64) -> f64 {
        units * self.unit_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ByWeight(f64);
    impl Priced for ByWeight {
        fn unit_price(&self) -> f64 {
            self.0
        }
    }
    impl WeighPriced for ByWeight {}

    struct ByPiece(f64);
    impl Priced for ByPiece {
        fn unit_price(&self) -> f64 {
            self.0
        }
    }
    impl UnitPriced for ByPiece {}

    #[test]
    fn default_totals_multiply_quantity_by_unit_price() {
        assert_eq!(ByWeight(100.0).total_by_kilo(2.5), 250.0);
        assert_eq!(ByPiece(200.0).total_by_unit(2.0), 400.0);
    }

    #[test]
    fn zero_quantity_totals_zero() {
        assert_eq!(ByWeight(123.0).total_by_kilo(0.0), 0.0);
        assert_eq!(ByPiece(123.0).total_by_unit(0.0), 0.0);
    }
}
