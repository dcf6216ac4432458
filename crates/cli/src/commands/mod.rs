//! CLI command implementations.

mod info;
mod render;
mod validate;

pub use info::run_info;
pub use render::run_render;
pub use validate::run_validate;
