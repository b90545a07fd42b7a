//! Static copy for the landing page.

use serde::Serialize;

/// Decorative glyphs standing in for an icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
	Box,
	Blocks,
	Coins,
	FileText,
	Shield,
	Globe,
	Zap,
	ChevronRight,
	Code,
	Wallet,
}

impl Icon {
	pub fn glyph(self) -> &'static str {
		match self {
			Icon::Box => "\u{25a3}",
			Icon::Blocks => "\u{2b22}",
			Icon::Coins => "\u{25ce}",
			Icon::FileText => "\u{25a4}",
			Icon::Shield => "\u{26e8}",
			Icon::Globe => "\u{25cd}",
			Icon::Zap => "\u{03df}",
			Icon::ChevronRight => "\u{203a}",
			Icon::Code => "</>",
			Icon::Wallet => "\u{25ad}",
		}
	}

	/// CSS class, e.g. `icon icon-file-text`.
	pub fn class(self) -> &'static str {
		match self {
			Icon::Box => "icon icon-box",
			Icon::Blocks => "icon icon-blocks",
			Icon::Coins => "icon icon-coins",
			Icon::FileText => "icon icon-file-text",
			Icon::Shield => "icon icon-shield",
			Icon::Globe => "icon icon-globe",
			Icon::Zap => "icon icon-zap",
			Icon::ChevronRight => "icon icon-chevron-right",
			Icon::Code => "icon icon-code",
			Icon::Wallet => "icon icon-wallet",
		}
	}
}

/// One card in the feature grid.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
	pub icon: Icon,
	pub title: &'static str,
	pub description: &'static str,
}

pub const PRODUCT_NAME: &str = "DigitalAsset.ai";

pub const FEATURES: [Feature; 6] = [
	Feature {
		icon: Icon::Box,
		title: "Multi-Chain Analysis",
		description: "Track assets across Ethereum, Solana, Avalanche, and more",
	},
	Feature {
		icon: Icon::Coins,
		title: "Token Metrics",
		description: "Real-time market cap, supply, and circulation data",
	},
	Feature {
		icon: Icon::FileText,
		title: "Smart Contracts",
		description: "Verified contract addresses and security audits",
	},
	Feature {
		icon: Icon::Globe,
		title: "Use Cases",
		description: "DeFi, NFTs, Gaming, and emerging applications",
	},
	Feature {
		icon: Icon::Shield,
		title: "Compliance",
		description: "Global regulatory status and requirements",
	},
	Feature {
		icon: Icon::Zap,
		title: "AI Insights",
		description: "Advanced analytics and trend prediction",
	},
];

/// Bullet points beside the data preview.
pub const DATA_POINTS: [&str; 4] = [
	"Blockchain Network Analysis",
	"Token Metrics & Trading Data",
	"Smart Contract Verification",
	"Regulatory Compliance Status",
];

/// The mock record shown in the data preview window.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPreview {
	pub network: &'static str,
	pub token: &'static str,
	pub market_cap: &'static str,
	pub supply: &'static str,
	pub contract: &'static str,
	#[serde(rename = "type")]
	pub kind: &'static str,
}

impl AssetPreview {
	pub fn dai() -> Self {
		Self {
			network: "Ethereum",
			token: "DAI",
			market_cap: "$5.2B",
			supply: "5.2B DAI",
			contract: "0x6b17...",
			kind: "Stablecoin",
		}
	}

	/// Two-space indented JSON, keys in declaration order.
	pub fn to_pretty_json(&self) -> String {
		serde_json::to_string_pretty(self).unwrap_or_default()
	}
}
