//! Command implementations for ust-cli

pub mod check;
pub mod convert;
pub mod import_nn;
pub mod info;
pub mod quantize;

pub use check::run_check;
pub use convert::{ConvertOverrides, run_convert};
pub use import_nn::run_import_nn;
pub use info::run_info;
pub use quantize::run_quantize;
