use serde::{Deserialize, Serialize};

use maxrects::io::svg::SvgDrawOptions;

/// Configuration for a packing run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PackConfig {
    /// Write an SVG file for every bin next to the JSON solution
    #[serde(default = "default_write_svg")]
    pub write_svg: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_write_svg() -> bool {
    true
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            write_svg: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
