//! digital-asset-landing: the DigitalAsset.ai landing page.
//!
//! A WASM client-rendered marketing page: static sections over an ambient,
//! canvas-drawn particle backdrop that drifts and bounces off the viewport.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed to switch on the `js` entropy source for `rand` in the browser.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::landing::LandingPage;
pub use components::particle_field::{ParticleFieldCanvas, ParticleStyle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("digital-asset-landing: logging initialized");
}

/// Load the backdrop style from a script element with id="particle-config".
/// Expected format: JSON with any of { count, speed, size_max, color: { r, g, b, a } }
fn load_particle_style() -> ParticleStyle {
	read_script_text("particle-config")
		.map(|json| parse_particle_style(&json))
		.unwrap_or_default()
}

fn read_script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

fn parse_particle_style(json: &str) -> ParticleStyle {
	match serde_json::from_str::<ParticleStyle>(json) {
		Ok(mut style) => {
			if style.count > ParticleStyle::MAX_COUNT {
				warn!(
					"digital-asset-landing: particle count {} too large, using {}",
					style.count,
					ParticleStyle::MAX_COUNT
				);
				style.count = ParticleStyle::MAX_COUNT;
			}
			info!(
				"digital-asset-landing: particle config loaded ({} particles)",
				style.count
			);
			style
		}
		Err(e) => {
			warn!("digital-asset-landing: failed to parse particle config: {}", e);
			ParticleStyle::default()
		}
	}
}

/// Main application component.
/// Reads the optional backdrop config from the DOM and renders the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let particles = load_particle_style();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="DigitalAsset.ai" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{components::landing::LANDING_CSS}</Style>

		<LandingPage particles=particles />
	}
}
