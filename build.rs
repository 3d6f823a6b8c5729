use std::fs;
use std::path::{Path, PathBuf};

// Values baked in through `option_env!` in src/config.rs.
const CONFIG_ENV_VARS: &[&str] = &[
    "STOREFRONT_BACKEND_URL",
    "STOREFRONT_BACKEND_KEY",
    "STOREFRONT_WEBHOOK_URL",
    "STOREFRONT_ANNOUNCEMENT",
    "STOREFRONT_LOG_LEVEL",
];

fn add_watch_path(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return; };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files);
        } else {
            files.push(path);
        }
    }
}

fn main() {
    // Config defaults are compiled in, so a changed env var must rebuild the crate.
    for var in CONFIG_ENV_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return,
    };

    let assets = manifest_dir.join("assets");
    add_watch_path(&assets);

    // Stylesheets are pulled in through `asset!`; watch them individually as well.
    let mut files = Vec::new();
    walk_dir(&assets, &mut files);
    for file in files {
        if file.extension().is_some_and(|ext| ext == "css") {
            add_watch_path(&file);
        }
    }
}
