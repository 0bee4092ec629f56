use std::fmt;

/// The action a device capability performed, as a value.
///
/// Capabilities return this instead of writing to the console so callers
/// decide how (and whether) to render confirmations, and tests can assert
/// on the exact sequence of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceAction {
    PrintedBlackAndWhite,
    PrintedColor,
    Scanned,
    FaxSent,
}

impl DeviceAction {
    /// The fixed confirmation string for this action; one per variant.
    pub fn confirmation(&self) -> &'static str {
        match self {
            DeviceAction::PrintedBlackAndWhite => "printing in black and white",
            DeviceAction::PrintedColor => "printing in color",
            DeviceAction::Scanned => "scanning document",
            DeviceAction::FaxSent => "sending fax",
        }
    }

    /// Stable machine-readable name, used for structured output.
    pub fn name(&self) -> &'static str {
        match self {
            DeviceAction::PrintedBlackAndWhite => "print_black_and_white",
            DeviceAction::PrintedColor => "print_color",
            DeviceAction::Scanned => "scan",
            DeviceAction::FaxSent => "send_fax",
        }
    }
}

impl fmt::Display for DeviceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.confirmation())
    }
}

/// Can print in black and white.
pub trait MonoPrinter {
    fn print_black_and_white(&self) -> DeviceAction;
}

/// Can print in color.
pub trait ColorPrinter {
    fn print_color(&self) -> DeviceAction;
}

/// Can scan documents.
pub trait Scanner {
    fn scan(&self) -> DeviceAction;
}

/// Can send faxes.
pub trait Fax {
    fn send_fax(&self) -> DeviceAction;
}

/// Exactly the union of the four device capabilities, nothing more.
///
/// Blanket-implemented: any type providing all four capabilities is a
/// multifunction device without re-declaring a single method. Consumers
/// that only need one capability keep depending on that one trait.
pub trait MultiFunction: MonoPrinter + ColorPrinter + Scanner + Fax {}

impl<T: MonoPrinter + ColorPrinter + Scanner + Fax> MultiFunction for T {}
