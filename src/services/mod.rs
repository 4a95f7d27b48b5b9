pub mod analysis_service;
pub mod image_fetcher;
pub mod image_source;

pub use analysis_service::AnalysisService;
pub use image_fetcher::{FetchError, HttpImageFetcher, ImageFetcher};
pub use image_source::{decode_inline, AcquiredImage, ImageSource, Provenance};
