use fruitshop_config::{Config, load, load_toml};
use rstest::rstest;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn defaults_reproduce_the_fixed_sequence() {
    let cfg = Config::default();
    assert_eq!(cfg.quantities.cherry_kilos, 2.5);
    assert_eq!(cfg.quantities.melon_units, 2.0);
    assert_eq!(cfg.quantities.damson_kilos, 2.5);
    assert_eq!(cfg.quantities.lettuce_units, 2.0);
    cfg.validate().expect("defaults must validate");
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let cfg = load_toml(
        r#"
[quantities]
cherry_kilos = 1.0
"#,
    )
    .expect("parse TOML");
    assert_eq!(cfg.quantities.cherry_kilos, 1.0);
    assert_eq!(cfg.quantities.melon_units, 2.0);
}

#[rstest]
#[case("cherry_kilos", -1.0)]
#[case("melon_units", -0.5)]
fn rejects_negative_quantities(#[case] key: &str, #[case] value: f64) {
    let toml = format!("[quantities]\n{key} = {value}\n");
    let cfg = load_toml(&toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject negative quantity");
    assert!(format!("{err}").contains(key));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let cfg = load(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(cfg.quantities, Config::default().quantities);
}

#[test]
fn load_reads_and_validates_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shop.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "[quantities]\nmelon_units = 3.0\n[logging]\nlevel = \"debug\"").unwrap();

    let cfg = load(&path).expect("load");
    assert_eq!(cfg.quantities.melon_units, 3.0);
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[quantities]\ncherry_kilos = -2.0\n").unwrap();
    assert!(load(&bad).is_err());
}
