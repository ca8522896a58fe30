//! Visual theming for rendered diagrams.
//!
//! Provides the color type, Graphviz color-name resolution, and the default
//! styles applied when a description leaves an attribute unset.

use log::debug;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a color as written in a description: `#RRGGBB`, `#RRGGBBAA`,
	/// `rgb()`/`rgba()` notation, or a Graphviz/X11 color name.
	pub fn parse(value: &str) -> Option<Self> {
		let value = value.trim();
		if let Some(hex) = value.strip_prefix('#') {
			return parse_hex(hex);
		}
		if value.starts_with("rgb") {
			let nums: Vec<&str> = value
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums.first()?.trim().parse().ok()?;
			let g = nums.get(1)?.trim().parse().ok()?;
			let b = nums.get(2)?.trim().parse().ok()?;
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			return Some(Self::rgba(r, g, b, a));
		}
		named(value)
	}
}

fn parse_hex(hex: &str) -> Option<Color> {
	let channel = |i: usize| hex.get(i..i + 2).and_then(|s| u8::from_str_radix(s, 16).ok());
	match hex.len() {
		6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
		8 => Some(Color::rgba(
			channel(0)?,
			channel(2)?,
			channel(4)?,
			channel(6)? as f64 / 255.0,
		)),
		_ => None,
	}
}

/// Graphviz resolves bare names against the X11 scheme, so `gray` and `green`
/// are the X11 values, not the CSS ones.
fn named(name: &str) -> Option<Color> {
	let name = name.trim_start_matches("/x11/").to_ascii_lowercase();
	let color = match name.as_str() {
		"black" => Color::rgb(0, 0, 0),
		"white" => Color::rgb(255, 255, 255),
		"gray" | "grey" => Color::rgb(192, 192, 192),
		"lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
		"darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
		"dimgray" | "dimgrey" => Color::rgb(105, 105, 105),
		"red" => Color::rgb(255, 0, 0),
		"darkred" => Color::rgb(139, 0, 0),
		"lightcoral" => Color::rgb(240, 128, 128),
		"coral" => Color::rgb(255, 127, 80),
		"salmon" => Color::rgb(250, 128, 114),
		"pink" => Color::rgb(255, 192, 203),
		"green" => Color::rgb(0, 255, 0),
		"darkgreen" => Color::rgb(0, 100, 0),
		"lightgreen" => Color::rgb(144, 238, 144),
		"forestgreen" => Color::rgb(34, 139, 34),
		"blue" => Color::rgb(0, 0, 255),
		"darkblue" => Color::rgb(0, 0, 139),
		"navy" | "navyblue" => Color::rgb(0, 0, 128),
		"lightblue" => Color::rgb(173, 216, 230),
		"skyblue" => Color::rgb(135, 206, 235),
		"steelblue" => Color::rgb(70, 130, 180),
		"cyan" => Color::rgb(0, 255, 255),
		"teal" => Color::rgb(0, 128, 128),
		"purple" => Color::rgb(160, 32, 240),
		"magenta" => Color::rgb(255, 0, 255),
		"violet" => Color::rgb(238, 130, 238),
		"lavender" => Color::rgb(230, 230, 250),
		"orange" => Color::rgb(255, 165, 0),
		"darkorange" => Color::rgb(255, 140, 0),
		"gold" => Color::rgb(255, 215, 0),
		"yellow" => Color::rgb(255, 255, 0),
		"brown" => Color::rgb(165, 42, 42),
		"tan" => Color::rgb(210, 180, 140),
		"beige" => Color::rgb(245, 245, 220),
		"transparent" | "none" => Color::rgba(255, 255, 254, 0.0),
		_ => return None,
	};
	Some(color)
}

/// Node visual defaults.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Outline color when `color` is unset.
	pub stroke: Color,
	/// Fill used by `style=filled` when neither `fillcolor` nor `color` is set.
	pub fill: Color,
	/// Label color when `fontcolor` is unset.
	pub font_color: Color,
	/// Outline width in pixels (`style=bold` doubles it).
	pub stroke_width: f64,
	/// Corner radius for `style=rounded`.
	pub corner_radius: f64,
}

/// Edge visual defaults.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	pub font_color: Color,
	pub stroke_width: f64,
}

/// Cluster box visual defaults.
#[derive(Clone, Debug)]
pub struct ClusterStyle {
	pub stroke: Color,
	pub font_color: Color,
	pub stroke_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	/// Page background behind the diagram.
	pub background: Color,
	/// Used for any color value that does not resolve.
	pub fallback: Color,
	/// Font family when `fontname` is unset.
	pub font_family: &'static str,
	/// Font size in points when `fontsize` is unset.
	pub font_size: f64,
	pub node: NodeStyle,
	pub edge: EdgeStyle,
	pub cluster: ClusterStyle,
}

impl Theme {
	/// Graphviz-like defaults on a white page.
	pub fn graphviz() -> Self {
		Self {
			name: "graphviz",
			background: Color::rgb(255, 255, 255),
			fallback: Color::rgb(0, 0, 0),
			font_family: "Times,serif",
			font_size: 14.0,
			node: NodeStyle {
				stroke: Color::rgb(0, 0, 0),
				fill: Color::rgb(211, 211, 211),
				font_color: Color::rgb(0, 0, 0),
				stroke_width: 1.0,
				corner_radius: 6.0,
			},
			edge: EdgeStyle {
				color: Color::rgb(0, 0, 0),
				font_color: Color::rgb(0, 0, 0),
				stroke_width: 1.0,
			},
			cluster: ClusterStyle {
				stroke: Color::rgb(0, 0, 0),
				font_color: Color::rgb(0, 0, 0),
				stroke_width: 1.0,
			},
		}
	}

	/// Resolve an optional color attribute, falling back to `default` when
	/// unset and to [`Theme::fallback`] when the value is not a known color.
	pub fn resolve(&self, value: Option<&str>, default: Color) -> Color {
		match value {
			None => default,
			Some(value) => Color::parse(value).unwrap_or_else(|| {
				debug!("rag-arch-viewer: unknown color {value:?}, using fallback");
				self.fallback
			}),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::graphviz()
	}
}
