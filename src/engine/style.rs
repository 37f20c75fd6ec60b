use bon::bon;
use std::str::FromStr;

pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_COLOR: &str = "red";

#[derive(thiserror::Error, Debug)]
pub enum StyleError {
	#[error("line width must be positive and finite, got {0}")]
	InvalidLineWidth(f64),

	#[error("invalid stroke color {color:?}")]
	InvalidColor {
		color: String,
		#[source]
		source: csscolorparser::ParseColorError,
	},

	#[error("unknown line join {0:?}")]
	UnknownLineJoin(String),

	#[error("unknown line cap {0:?}")]
	UnknownLineCap(String),
}

static_assertions::assert_impl_all!(StyleError: std::error::Error, Send, Sync);

/// How the corners of consecutive segments are joined. Displays as the canvas `lineJoin` value.
#[derive(derive_more::Display, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineJoin {
	#[default]
	#[display("round")]
	Round,
	#[display("bevel")]
	Bevel,
	#[display("miter")]
	Miter,
}

impl LineJoin {
	pub const ALL: [LineJoin; 3] = [LineJoin::Round, LineJoin::Bevel, LineJoin::Miter];
}

impl FromStr for LineJoin {
	type Err = StyleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|join| join.to_string() == s)
			.ok_or_else(|| StyleError::UnknownLineJoin(s.to_owned()))
	}
}

/// How the ends of a stroke are drawn. Displays as the canvas `lineCap` value.
#[derive(derive_more::Display, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCap {
	#[default]
	#[display("round")]
	Round,
	#[display("square")]
	Square,
	#[display("butt")]
	Butt,
}

impl LineCap {
	pub const ALL: [LineCap; 3] = [LineCap::Round, LineCap::Square, LineCap::Butt];
}

impl FromStr for LineCap {
	type Err = StyleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|cap| cap.to_string() == s)
			.ok_or_else(|| StyleError::UnknownLineCap(s.to_owned()))
	}
}

/// Appearance of painted segments. Validated on construction and never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
	line_join: LineJoin,
	line_cap: LineCap,
	line_width: f64,
	color: String,
}

#[bon]
impl StrokeStyle {
	#[builder]
	pub fn new(
		#[builder(default)] line_join: LineJoin,
		#[builder(default)] line_cap: LineCap,
		#[builder(default = DEFAULT_LINE_WIDTH)] line_width: f64,
		#[builder(into, default = String::from(DEFAULT_COLOR))] color: String,
	) -> Result<Self, StyleError> {
		// `!(x > 0)` also rejects NaN.
		if !(line_width > 0.0 && line_width.is_finite()) {
			return Err(StyleError::InvalidLineWidth(line_width));
		}
		if let Err(source) = csscolorparser::parse(&color) {
			return Err(StyleError::InvalidColor { color, source });
		}
		Ok(Self {
			line_join,
			line_cap,
			line_width,
			color,
		})
	}
}

impl StrokeStyle {
	pub fn line_join(&self) -> LineJoin {
		self.line_join
	}

	pub fn line_cap(&self) -> LineCap {
		self.line_cap
	}

	pub fn line_width(&self) -> f64 {
		self.line_width
	}

	/// The color as given, in any CSS color syntax.
	pub fn color(&self) -> &str {
		&self.color
	}
}

impl Default for StrokeStyle {
	fn default() -> Self {
		Self {
			line_join: LineJoin::default(),
			line_cap: LineCap::default(),
			line_width: DEFAULT_LINE_WIDTH,
			color: DEFAULT_COLOR.to_owned(),
		}
	}
}
