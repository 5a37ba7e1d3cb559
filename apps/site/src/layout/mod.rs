// Print layout: static font metrics, greedy word wrap and pagination of the
// résumé preview. CPU-bound; callers on the async runtime must run it inside
// tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod paginate;
pub mod wrap;

// Re-export the public API consumed by the export layer.
pub use font_metrics::{default_page_config, FontFace, PageConfig, PageSize};
pub use paginate::{paginate, Page};
