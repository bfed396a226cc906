use std::{env, fs, path::PathBuf, process::Command};

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=WEBAPP_RUSTC_VERSION={}", rustc_version);

    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=WEBAPP_TARGET={}", target);

    // Resolved framework version, read from the lockfile next to the manifest.
    let lockfile =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default()).join("Cargo.lock");
    let axum_version = fs::read_to_string(&lockfile)
        .ok()
        .and_then(|lock| locked_version(&lock, "axum"))
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=WEBAPP_AXUM_VERSION={}", axum_version);

    println!("cargo:rerun-if-changed=Cargo.lock");
    println!("cargo:rerun-if-changed=build.rs");
}

fn locked_version(lock: &str, package: &str) -> Option<String> {
    let name_line = format!("name = \"{}\"", package);
    let mut lines = lock.lines();
    while let Some(line) = lines.next() {
        if line.trim() == name_line {
            let version = lines.next()?.trim();
            return version
                .strip_prefix("version = \"")
                .and_then(|v| v.strip_suffix('"'))
                .map(str::to_string);
        }
    }
    None
}
