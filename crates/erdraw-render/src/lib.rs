//! ErDraw Render Library
//!
//! Serializes the committed scene, the ephemeral preview and the selection
//! highlight into a standalone SVG document, and writes it to a file on
//! request. When to render or export is the host's call.

pub mod export;
pub mod svg;

pub use export::{write_svg, ExportError};
pub use svg::SvgRenderer;
