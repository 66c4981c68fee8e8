use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use vcs::GitCheckout;

#[path = "src/vcs.rs"]
mod vcs;

const RESOURCE_DIR_VARIABLE: &str = "BUILDINFO_RESOURCE_DIR";
const GENERATED_FILE_NAME: &str = "embedded_metadata.rs";

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-env-changed={RESOURCE_DIR_VARIABLE}");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let manifest_dir = PathBuf::from(env_var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env_var("OUT_DIR")?);
    let resource_dir = env::var_os(RESOURCE_DIR_VARIABLE)
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join("resources"));
    if resource_dir.is_dir() {
        println!("cargo:rerun-if-changed={}", resource_dir.display());
    }

    let mut generated = String::new();
    for (constant, file_name) in [
        ("DESCRIBE", "describe.txt"),
        ("REVISION", "revision.txt"),
        ("STATUS", "status.txt"),
    ] {
        let content = read_resource(&resource_dir.join(file_name))?;
        writeln!(
            generated,
            "pub const {constant}: Option<&str> = {content:?};"
        )
        .map_err(io::Error::other)?;
    }

    let toolchain_version = toolchain_version();
    writeln!(
        generated,
        "pub const TOOLCHAIN_VERSION: Option<&str> = {toolchain_version:?};"
    )
    .map_err(io::Error::other)?;

    let settings = build_settings(&manifest_dir);
    writeln!(generated, "pub const SETTINGS: &[(&str, &str)] = &[").map_err(io::Error::other)?;
    for (key, value) in &settings {
        writeln!(generated, "    ({key:?}, {value:?}),").map_err(io::Error::other)?;
    }
    writeln!(generated, "];").map_err(io::Error::other)?;

    fs::write(out_dir.join(GENERATED_FILE_NAME), generated)
}

fn env_var(name: &str) -> io::Result<String> {
    env::var(name).map_err(|err| io::Error::other(format!("{name}: {err}")))
}

/// A missing resource is not an error, the binary simply carries no such metadata.
fn read_resource(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// `rustc --version` prints e.g. "rustc 1.86.0 (05f9846f8 2025-03-31)", this keeps "rustc1.86.0".
fn toolchain_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())?;
    let output = String::from_utf8_lossy(&output.stdout);
    let version = output.split_whitespace().nth(1)?;
    Some(format!("rustc{version}"))
}

fn build_settings(manifest_dir: &Path) -> Vec<(String, String)> {
    let mut settings = vec![];
    for (key, variable) in [
        ("target", "TARGET"),
        ("profile", "PROFILE"),
        ("opt-level", "OPT_LEVEL"),
    ] {
        if let Ok(value) = env::var(variable) {
            settings.push((key.to_string(), value));
        }
    }

    if let Some(checkout) = GitCheckout::discover(manifest_dir) {
        for path in checkout.watched_paths() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
        settings.extend(checkout.settings());
    }
    settings
}
