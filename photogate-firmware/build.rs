//! Build script for photogate-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates speedometer.toml at compile time

use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sections and keys accepted by the firmware's config parser
const SCHEMA: &[(&str, &[&str])] = &[
    ("sensors", &["spacing_mm"]),
    (
        "timeouts",
        &["sensor_ms", "reset_ms", "display_ms", "unit_change_ms", "debounce_ms"],
    ),
];

fn main() -> Result<(), Box<dyn Error>> {
    setup_linker()?;
    validate_config()?;
    Ok(())
}

/// Set up linker search paths for memory.x
fn setup_linker() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x"))?;
    f.write_all(memory_x)?;

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

/// Validate speedometer.toml configuration at compile time
fn validate_config() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=speedometer.toml");

    let config_path = Path::new("speedometer.toml");
    if !config_path.exists() {
        return Err("speedometer.toml not found in the photogate-firmware directory".into());
    }

    let content = fs::read_to_string(config_path)?;
    let config: toml::Value =
        toml::from_str(&content).map_err(|e| format!("speedometer.toml: {e}"))?;

    let errors = check_schema(&config);
    if !errors.is_empty() {
        let list = errors
            .iter()
            .map(|e| format!("  - {e}"))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(format!("invalid speedometer.toml:\n{list}").into());
    }

    Ok(())
}

fn check_schema(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(root) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return errors;
    };

    for (section, table) in root {
        let Some(keys) = SCHEMA
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, keys)| *keys)
        else {
            errors.push(format!("unknown section [{section}]"));
            continue;
        };

        let Some(table) = table.as_table() else {
            errors.push(format!("[{section}] must be a table"));
            continue;
        };

        for (key, value) in table {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{section}] unknown key '{key}'"));
                continue;
            }
            match value.as_integer() {
                Some(v) if v > 0 && v <= i64::from(u32::MAX) => {}
                _ => errors.push(format!("[{section}] {key} must be a positive integer")),
            }
        }
    }

    errors
}
