use std::env;
use std::fs;
use std::path::Path;

const PREFIX: &str = "DOM_UTILS_";

fn main() {
    // Cargar variables DOM_UTILS_* desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !key.starts_with(PREFIX) {
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in [
        "DOM_UTILS_ENABLE_LOGGING",
        "DOM_UTILS_LOG_LEVEL",
        "DOM_UTILS_DEBOUNCE_MS",
        "DOM_UTILS_THROTTLE_MS",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
