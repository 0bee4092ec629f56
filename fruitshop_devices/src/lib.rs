//! Concrete office devices for the shop, one type per physical variant.
//!
//! Each device implements only the capability traits it can actually
//! perform: the mono laser has no color, scan, or fax method at all, so a
//! caller holding a `MonoLaser` cannot even express an unsupported
//! request. `OfficeHub` provides all four capabilities and is therefore a
//! `fruitshop_traits::MultiFunction` through the blanket impl, without
//! re-declaring any method.

use fruitshop_traits::{ColorPrinter, DeviceAction, Fax, MonoPrinter, Scanner};

/// Black-and-white receipt printer.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonoLaser;

impl MonoLaser {
    pub fn new() -> Self {
        Self
    }
}

impl MonoPrinter for MonoLaser {
    fn print_black_and_white(&self) -> DeviceAction {
        tracing::debug!(device = "mono_laser", "print job");
        DeviceAction::PrintedBlackAndWhite
    }
}

/// Color flyer printer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorInkjet;

impl ColorInkjet {
    pub fn new() -> Self {
        Self
    }
}

impl ColorPrinter for ColorInkjet {
    fn print_color(&self) -> DeviceAction {
        tracing::debug!(device = "color_inkjet", "print job");
        DeviceAction::PrintedColor
    }
}

/// Multifunction office device: prints (mono and color), scans, faxes.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfficeHub;

impl OfficeHub {
    pub fn new() -> Self {
        Self
    }
}

impl MonoPrinter for OfficeHub {
    fn print_black_and_white(&self) -> DeviceAction {
        tracing::debug!(device = "office_hub", "print job");
        DeviceAction::PrintedBlackAndWhite
    }
}

impl ColorPrinter for OfficeHub {
    fn print_color(&self) -> DeviceAction {
        tracing::debug!(device = "office_hub", "print job");
        DeviceAction::PrintedColor
    }
}

impl Scanner for OfficeHub {
    fn scan(&self) -> DeviceAction {
        tracing::debug!(device = "office_hub", "scan job");
        DeviceAction::Scanned
    }
}

impl Fax for OfficeHub {
    fn send_fax(&self) -> DeviceAction {
        tracing::debug!(device = "office_hub", "fax job");
        DeviceAction::FaxSent
    }
}
