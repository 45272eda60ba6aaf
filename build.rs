//! Build script for nex-server
//!
//! When the `ui` feature is enabled the compiled web client is embedded from
//! `ui/dist`, so the build fails early with instructions if it is missing.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Features reach build scripts as env vars, not cfg flags
    if std::env::var_os("CARGO_FEATURE_UI").is_none() {
        return;
    }

    println!("cargo:rerun-if-changed=ui/dist/");
    println!("cargo:rerun-if-changed=ui/src/");
    println!("cargo:rerun-if-changed=ui/index.html");

    let index = std::path::Path::new("ui/dist/index.html");
    if index.exists() {
        return;
    }

    let has_trunk = std::process::Command::new("trunk")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    println!("cargo:warning=Nex.Ai UI: ui/dist/index.html not found");
    if !has_trunk {
        println!("cargo:warning=Nex.Ai UI: install trunk with `cargo install trunk`");
    }

    panic!(
        "\n\nBuild failed: the 'ui' feature embeds ui/dist, which has not been built.\n\
         Build the web client first:\n\n    \
         rustup target add wasm32-unknown-unknown\n    \
         cd ui && trunk build --release\n"
    );
}
