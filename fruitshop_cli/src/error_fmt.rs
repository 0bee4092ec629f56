//! Human-readable error descriptions and structured JSON error formatting.

use fruitshop_core::ShopError;

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(se) = err.downcast_ref::<ShopError>() {
        return match se {
            ShopError::InvalidQuantity(q) => format!(
                "What happened: The requested quantity ({q}) cannot be priced.\nLikely causes: A negative or non-numeric quantity was passed on the command line or written in the config.\nHow to fix: Pass a non-negative number, e.g. `fruitshop price cherry --kilos 2.5`."
            ),
        };
    }

    // String-based heuristics for errors coming from config loading
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("failed to parse config") || lower.contains("failed to read config") {
        return format!(
            "What happened: The config file could not be used.\nLikely causes: Malformed TOML or an unreadable path.\nHow to fix: Edit the file named by --config, then rerun. Original: {msg}"
        );
    }

    if lower.contains("must be a non-negative finite number") {
        return format!(
            "What happened: The config contains an invalid quantity.\nHow to fix: Quantities under [quantities] must be non-negative numbers. Original: {msg}"
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.chain().nth(1) {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Invalid quantities return 2 so scripts can tell bad input from other failures.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if matches!(
        err.downcast_ref::<ShopError>(),
        Some(ShopError::InvalidQuantity(_))
    ) {
        return 2;
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = match err.downcast_ref::<ShopError>() {
        Some(ShopError::InvalidQuantity(_)) => "InvalidQuantity",
        None => "Error",
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
