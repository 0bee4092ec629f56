//! Schema checks for --json output: every stdout line must be a JSON
//! object, sale lines carry totals, device lines carry confirmations.

use assert_cmd::prelude::*;
use serde_json::Value;
use std::process::Command;

fn json_lines(args: &[&str]) -> Vec<Value> {
    let mut cmd = Command::cargo_bin("fruitshop_cli").unwrap();
    cmd.arg("--json");
    for a in args {
        cmd.arg(a);
    }
    let out = cmd.output().unwrap();
    assert!(out.status.success(), "command failed: {:?}", out);
    String::from_utf8(out.stdout)
        .unwrap()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON line {l:?}: {e}")))
        .collect()
}

#[test]
fn demo_emits_ten_json_lines() {
    let lines = json_lines(&["demo"]);
    assert_eq!(lines.len(), 10, "4 sale lines + 2 dedicated + 4 multifunction");

    let (sales, actions): (Vec<_>, Vec<_>) =
        lines.iter().partition(|v| v.get("total").is_some());
    assert_eq!(sales.len(), 4);
    assert_eq!(actions.len(), 6);

    let totals: Vec<f64> = sales.iter().map(|v| v["total"].as_f64().unwrap()).collect();
    assert_eq!(totals, vec![250.0, 400.0, 500.0, 200.0]);

    for a in &actions {
        assert!(a["device"].is_string());
        assert!(a["action"].is_string());
        assert!(a["confirmation"].is_string());
    }
}

#[test]
fn price_emits_one_sale_line() {
    let lines = json_lines(&["price", "damson", "--kilos", "2.5"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["item"], "damson");
    assert_eq!(lines[0]["sold_by"], "kilo");
    assert_eq!(lines[0]["total"], 500.0);
}

#[test]
fn json_errors_are_structured() {
    let mut cmd = Command::cargo_bin("fruitshop_cli").unwrap();
    let out = cmd
        .args(["--json", "price", "lettuce", "--units=-3"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    let err: Value = serde_json::from_slice(&out.stderr).expect("stderr is one JSON object");
    assert_eq!(err["reason"], "InvalidQuantity");
    assert!(err["message"].as_str().unwrap().contains("cannot be priced"));
}
