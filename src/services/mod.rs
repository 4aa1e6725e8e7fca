pub mod analysis_service;
pub mod image_loader;

pub use analysis_service::{AnalysisOptions, AnalysisService};
pub use image_loader::{decode_png, load_png, DecodedImage};
