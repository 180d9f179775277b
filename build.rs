#![allow(clippy::indexing_slicing, clippy::exit, clippy::unwrap_used)]
fn main() {
    // Strip every log frame from release images.
    if std::env::var("PROFILE").unwrap_or_default() == "release" {
        println!("cargo:rustc-env=DEFMT_LOG=off");
    }

    linker_hints();
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Registers this build script as the linker's error handler, so undefined
/// symbols that usually mean a missing linker script get a readable hint.
fn linker_hints() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        let hint = match (args[1].as_str(), args[2].as_str()) {
            ("undefined-symbol", "_defmt_timestamp") => Some(
                "`defmt` not found - make sure `defmt.x` is added as a linker script and a defmt transport such as `esp-println` is linked",
            ),
            ("undefined-symbol", "_stack_start") => {
                Some("Is the linker script `linkall.x` missing?")
            }
            ("undefined-symbol", "esp_rtos_initialized" | "esp_rtos_yield_task") => Some(
                "`esp-rtos` was never started - call `esp_rtos::start` before spawning the game task",
            ),
            ("undefined-symbol", _) => None,
            _ => std::process::exit(1),
        };

        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {hint}");
            eprintln!();
        }
        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=-Wl,--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
