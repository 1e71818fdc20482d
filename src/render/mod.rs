pub mod svg;

pub use svg::{SvgOptions, render_svg, write_svg};
