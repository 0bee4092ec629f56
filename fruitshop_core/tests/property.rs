use fruitshop_core::{ShopError, unit_line, weigh_line};
use fruitshop_traits::{Priced, UnitPriced, WeighPriced};
use proptest::prelude::*;

// Parametric items so the property ranges over unit prices, not just the
// fixed shelf prices.
struct Bulk(f64);
impl Priced for Bulk {
    fn unit_price(&self) -> f64 {
        self.0
    }
}
impl WeighPriced for Bulk {}

struct Piece(f64);
impl Priced for Piece {
    fn unit_price(&self) -> f64 {
        self.0
    }
}
impl UnitPriced for Piece {}

proptest! {
    // total(q, p) = p * q for both strategies; multiplication is the same
    // single f64 operation on both sides, so equality is exact.
    #[test]
    fn totals_are_price_times_quantity(p in 0.0f64..10_000.0, q in 0.0f64..1_000.0) {
        prop_assert_eq!(Bulk(p).total_by_kilo(q), p * q);
        prop_assert_eq!(Piece(p).total_by_unit(q), p * q);
    }

    #[test]
    fn sale_lines_agree_with_the_trait_totals(p in 0.0f64..10_000.0, q in 0.0f64..1_000.0) {
        let line = weigh_line("bulk", &Bulk(p), q).unwrap();
        prop_assert_eq!(line.total, Bulk(p).total_by_kilo(q));
        let line = unit_line("piece", &Piece(p), q).unwrap();
        prop_assert_eq!(line.total, Piece(p).total_by_unit(q));
    }

    #[test]
    fn negative_quantities_never_price(q in -1_000.0f64..-0.000_001) {
        prop_assert_eq!(
            weigh_line("bulk", &Bulk(1.0), q).unwrap_err(),
            ShopError::InvalidQuantity(q)
        );
        prop_assert_eq!(
            unit_line("piece", &Piece(1.0), q).unwrap_err(),
            ShopError::InvalidQuantity(q)
        );
    }
}
