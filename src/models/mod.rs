pub mod config;
pub mod request;
pub mod response;

pub use config::{AnalysisConfig, AppConfig, FetchConfig, ServerConfig};
pub use request::{AnalyzeRequest, FaceBoxInput};
pub use response::{AnalyzeResponse, ErrorResponse, LabValue, RgbValue, Scores};
