//! The DigitalAsset.ai marketing page.
//!
//! Pure presentation: navigation, hero, feature grid, data preview and a
//! closing call to action, laid over the particle backdrop.

mod content;
mod sections;
mod styles;

use leptos::prelude::*;

use super::particle_field::{ParticleFieldCanvas, ParticleStyle};

pub use content::{AssetPreview, DATA_POINTS, FEATURES, Feature, Icon, PRODUCT_NAME};
pub use sections::{CallToAction, DataPreview, FeatureGrid, Hero, Nav};
pub use styles::LANDING_CSS;

/// The whole page. `particles` overrides the backdrop style.
#[component]
pub fn LandingPage(#[prop(optional)] particles: Option<ParticleStyle>) -> impl IntoView {
	view! {
		<div class="landing">
			<ParticleFieldCanvas particles={particles.unwrap_or_default()} />
			<Nav />
			<Hero />
			<FeatureGrid />
			<DataPreview />
			<CallToAction />
		</div>
	}
}
