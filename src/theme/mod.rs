//! Theme for Prompt All About It.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
