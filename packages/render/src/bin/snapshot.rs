#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fetches the local crime endpoint and writes `snapshot.svg`.
//!
//! Usage: `safe_commute_snapshot [endpoint]` with the server running;
//! defaults to `http://localhost:3000/api/crime-data`.

use safe_commute_render::{HeatRenderer, RenderState, SvgSurface};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000/api/crime-data".to_string());

    let mut renderer = HeatRenderer::new(SvgSurface::new(), endpoint, reqwest::Client::new());
    renderer.load().await;

    if renderer.state() != RenderState::Rendered {
        log::error!("Load failed; writing empty snapshot");
    }

    let svg = renderer.surface().to_svg();
    std::fs::write("snapshot.svg", &svg)?;
    log::info!("Wrote snapshot.svg ({} bytes)", svg.len());
    Ok(())
}
