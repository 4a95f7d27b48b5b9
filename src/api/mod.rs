pub mod analyze;

pub use analyze::{handle_analyze, __path_handle_analyze};
