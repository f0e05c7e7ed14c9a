pub mod config;
pub mod constants;
pub mod error;
pub mod processing;
pub mod signal_processing;
pub mod wav;

pub use config::FilterConfig;
pub use error::{FirError, Result};
pub use processing::{apply_filter, apply_filter_with_config};
pub use wav::{AudioRecord, read_wav, save_wav};
