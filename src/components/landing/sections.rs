//! Page sections, top to bottom.

use leptos::prelude::*;

use super::content::{AssetPreview, DATA_POINTS, FEATURES, Feature, Icon, PRODUCT_NAME};

#[component]
fn Glyph(icon: Icon) -> impl IntoView {
	view! { <span class={icon.class()} aria-hidden="true">{icon.glyph()}</span> }
}

/// Fixed top bar with the product mark.
#[component]
pub fn Nav() -> impl IntoView {
	view! {
		<nav class="nav">
			<div class="container nav-inner">
				<div class="brand">
					<Glyph icon=Icon::Blocks />
					<span class="brand-name gradient-text">{PRODUCT_NAME}</span>
				</div>
				<button class="btn btn-pill btn-gradient">"Launch App"</button>
			</div>
		</nav>
	}
}

/// Headline, sub copy and the two primary buttons, with floating icons behind.
#[component]
pub fn Hero() -> impl IntoView {
	view! {
		<section class="hero">
			<div class="container">
				<div class="hero-copy">
					<h1>
						<span class="gradient-text">"The Future of"</span>
						<br />
						"Digital Assets"
					</h1>
					<p class="lead">
						"Comprehensive database of Web3 projects, blockchain networks, and digital \
						 assets powered by AI analytics."
					</p>
					<div class="hero-actions">
						<button class="btn btn-gradient btn-icon">
							<span>"Explore Assets"</span>
							<Glyph icon=Icon::ChevronRight />
						</button>
						<button class="btn btn-muted">"Learn More"</button>
					</div>
				</div>
			</div>

			<div class="floating float-a animate-float">
				<Glyph icon=Icon::Blocks />
			</div>
			<div class="floating float-b animate-float-delay">
				<Glyph icon=Icon::Code />
			</div>
			<div class="floating float-c animate-float">
				<Glyph icon=Icon::Wallet />
			</div>
		</section>
	}
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
	view! {
		<div class="card">
			<div class="card-icon">
				<Glyph icon={feature.icon} />
			</div>
			<h3>{feature.title}</h3>
			<p class="muted">{feature.description}</p>
		</div>
	}
}

/// Six capability cards.
#[component]
pub fn FeatureGrid() -> impl IntoView {
	view! {
		<section class="features">
			<div class="section-wash"></div>
			<div class="container">
				<div class="grid">
					{FEATURES
						.iter()
						.map(|f| view! { <FeatureCard feature={*f} /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

/// Bullet list beside a fake terminal window holding a sample record.
#[component]
pub fn DataPreview() -> impl IntoView {
	let record = AssetPreview::dai().to_pretty_json();

	view! {
		<section class="preview">
			<div class="container">
				<div class="preview-panel">
					<div class="preview-column">
						<h2>
							"Comprehensive"
							<span class="accent block">"Digital Asset Data"</span>
						</h2>
						<ul class="points">
							{DATA_POINTS
								.iter()
								.map(|point| {
									view! {
										<li>
											<span class="dot"></span>
											<span>{*point}</span>
										</li>
									}
								})
								.collect_view()}
						</ul>
					</div>
					<div class="preview-column">
						<div class="terminal">
							<div class="terminal-lights">
								<span class="light red"></span>
								<span class="light yellow"></span>
								<span class="light green"></span>
							</div>
							<pre>{record}</pre>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

/// Closing call to action.
#[component]
pub fn CallToAction() -> impl IntoView {
	view! {
		<section class="cta">
			<div class="section-wash"></div>
			<div class="container narrow">
				<h2>"Ready to" <span class="accent">" Explore"</span></h2>
				<p class="lead">
					"Join thousands of professionals tracking digital assets with \
					 AI-powered insights."
				</p>
				<button class="btn btn-gradient btn-large btn-icon">
					<span>"Start Exploring"</span>
					<Glyph icon=Icon::ChevronRight />
				</button>
			</div>
		</section>
	}
}
