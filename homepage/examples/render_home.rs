//! Render the built-in homepage to a file.
//!
//! Run with: `cargo run --example render_home`

use homepage_leptos::{render_homepage, types::HomepageConfig};

fn main() {
    // Built-in RoboFIS catalog - five category cards
    let config = HomepageConfig::builtin();

    // Render to HTML
    let html = render_homepage(&config);

    // Write to file
    let output_path = "homepage.html";
    std::fs::write(output_path, &html).expect("Failed to write homepage");

    println!("Homepage written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
