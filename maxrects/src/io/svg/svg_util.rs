use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::PieceShape;
use crate::geometry::primitives::Rect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the free rectangles of the bin on top
    #[serde(default)]
    pub free_rects: bool,
    ///Label every piece with its id
    #[serde(default = "default_true")]
    pub labels: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            free_rects: false,
            labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub bin_fill: Color,
    pub piece_fill: Color,
    pub free_rect_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        bin_fill: Color(0xCC, 0x82, 0x4A),
        piece_fill: Color(0xFF, 0xC8, 0x79),
        free_rect_stroke: Color(0x00, 0x80, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Parses a `#RRGGBB` (or `RRGGBB`) hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            s.len() == 6 && s.is_ascii(),
            "invalid color: '{s}', expected #RRGGBB"
        );
        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(r: &Rect) -> Data {
    let [c0, c1, c2, c3] = r.corners();
    Data::new()
        .move_to((c0.0, c0.1))
        .line_to((c1.0, c1.1))
        .line_to((c2.0, c2.1))
        .line_to((c3.0, c3.1))
        .close()
}

/// Path data of every ring (outer boundaries and holes), to be filled with the `evenodd` rule
pub fn shape_data(shape: &PieceShape) -> Data {
    match shape {
        PieceShape::Rect(r) => rect_data(r),
        PieceShape::Polygon(p) => {
            let mut data = Data::new();
            let rings = p
                .inner()
                .iter()
                .flat_map(|poly| std::iter::once(poly.exterior()).chain(poly.interiors()));
            for ring in rings {
                let mut coords = ring.coords();
                if let Some(first) = coords.next() {
                    data = data.move_to((first.x, first.y));
                    for c in coords {
                        data = data.line_to((c.x, c.y));
                    }
                    data = data.close();
                }
            }
            data
        }
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
