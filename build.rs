use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load .env file from the crate root to inject the default API base at compile time
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let env_path = Path::new(&manifest_dir).join(".env");

    if env_path.exists() {
        if let Ok(contents) = fs::read_to_string(&env_path) {
            for line in contents.lines() {
                let line = line.trim();
                // Skip comments and empty lines
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if key == "KICK_API_BASE" && !value.is_empty() {
                        println!("cargo:rustc-env={}={}", key, value);
                        println!("cargo:warning=Loaded {} from .env", key);
                    }
                }
            }
        }
    }

    // Environment takes precedence over .env (e.g. CI)
    if let Ok(api_base) = env::var("KICK_API_BASE") {
        if !api_base.trim().is_empty() {
            println!("cargo:rustc-env=KICK_API_BASE={}", api_base.trim());
            println!("cargo:warning=Using KICK_API_BASE from environment");
        }
    }

    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=KICK_API_BASE");
}
