//! Neural Folio entry point
//!
//! On the web this wires every page behaviour and starts the background
//! animation. Natively it runs the particle field headless as a smoke test.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

    log::info!("Neural Folio starting...");

    if let Err(e) = neural_folio::platform::run() {
        log::error!("Page setup failed: {:?}", e);
        return Err(e);
    }

    log::info!("Neural Folio running!");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Neural Folio (native) starting...");
    log::info!("Page behaviours need a browser - run with `trunk serve` for the web version");

    println!("\nRunning headless background preview...");
    preview_field(1280.0, 720.0, 600);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Step a field for `frames` frames and report what would have been drawn
#[cfg(not(target_arch = "wasm32"))]
fn preview_field(width: f32, height: f32, frames: usize) {
    use neural_folio::Config;
    use neural_folio::field::Field;

    let config = Config::load();
    let mut field = Field::new(width, height, 42, config.field);

    let mut total_links = 0;
    let mut max_links = 0;
    for _ in 0..frames {
        field.step();
        let links = field.link_count();
        total_links += links;
        max_links = max_links.max(links);
    }

    let escaped = field
        .points
        .iter()
        .filter(|p| p.pos.x < -1.0 || p.pos.x > width + 1.0 || p.pos.y < -1.0 || p.pos.y > height + 1.0)
        .count();

    println!(
        "{}x{}: {} points, {} frames, avg {:.1} links/frame (max {})",
        width,
        height,
        field.points.len(),
        frames,
        total_links as f64 / frames.max(1) as f64,
        max_links
    );
    assert_eq!(escaped, 0, "points left the surface");
    println!("✓ Background preview passed!");
}
