mod assembly;
mod depth;
mod feature;

pub use assembly::{assemble_map, legend_entries, legend_html, transform};
pub use depth::{depth_color, DEPTH_LEGEND};
pub use feature::{escape_html, format_feature, marker_style};
