//! Command execution: config mapping, device assembly, and rendering.

use fruitshop_core::error::Result;
use fruitshop_core::{
    Cherry, Damson, DemoQuantities, Lettuce, Melon, SaleLine, dedicated_jobs,
    multifunction_sequence, standing_order, unit_line, weigh_line,
};
use fruitshop_devices::{ColorInkjet, MonoLaser, OfficeHub};
use fruitshop_traits::DeviceAction;

fn quantities(cfg: &fruitshop_config::Config) -> DemoQuantities {
    let q = &cfg.quantities;
    DemoQuantities {
        cherry_kilos: q.cherry_kilos,
        melon_units: q.melon_units,
        damson_kilos: q.damson_kilos,
        lettuce_units: q.lettuce_units,
    }
}

fn emit_line(line: &SaleLine, json: bool) {
    if json {
        match serde_json::to_string(line) {
            Ok(s) => println!("{s}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize sale line"),
        }
    } else {
        println!("{line}");
    }
}

fn emit_action(device: &str, action: DeviceAction, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "device": device,
                "action": action.name(),
                "confirmation": action.confirmation(),
            })
        );
    } else {
        println!("{device}: {action}");
    }
}

/// The full fixed demonstration: pricing section, then devices.
pub fn run_demo(cfg: &fruitshop_config::Config, json: bool) -> Result<()> {
    run_pricing(cfg, json)?;
    run_devices(json)
}

pub fn run_pricing(cfg: &fruitshop_config::Config, json: bool) -> Result<()> {
    let lines = standing_order(&quantities(cfg))?;
    if !json {
        println!("== Pricing ==");
    }
    for line in &lines {
        emit_line(line, json);
    }
    Ok(())
}

pub fn run_devices(json: bool) -> Result<()> {
    let mono = MonoLaser::new();
    let color = ColorInkjet::new();
    let hub = OfficeHub::new();

    if !json {
        println!("== Printers ==");
    }
    for (device, action) in ["mono_laser", "color_inkjet"]
        .into_iter()
        .zip(dedicated_jobs(&mono, &color))
    {
        emit_action(device, action, json);
    }

    if !json {
        println!("== Multifunction ==");
    }
    for action in multifunction_sequence(&hub) {
        emit_action("office_hub", action, json);
    }
    Ok(())
}

/// Price a single named item. Passing the flag for the strategy the item
/// is not sold by is an error; the item's type simply has no such total.
pub fn run_price(item: &str, kilos: Option<f64>, units: Option<f64>, json: bool) -> Result<()> {
    let line = match (item, kilos, units) {
        ("cherry", Some(kg), None) => weigh_line("cherry", &Cherry, kg)?,
        ("damson", Some(kg), None) => weigh_line("damson", &Damson, kg)?,
        ("melon", None, Some(n)) => unit_line("melon", &Melon, n)?,
        ("lettuce", None, Some(n)) => unit_line("lettuce", &Lettuce, n)?,
        ("cherry" | "damson", _, _) => {
            eyre::bail!("{item} is sold by the kilo; pass --kilos and nothing else")
        }
        ("melon" | "lettuce", _, _) => {
            eyre::bail!("{item} is sold by the piece; pass --units and nothing else")
        }
        _ => eyre::bail!("unknown item: {item} (try cherry, damson, melon, lettuce)"),
    };
    emit_line(&line, json);
    Ok(())
}
