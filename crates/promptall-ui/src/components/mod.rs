//! Reusable UI components for the site
//!
//! Form fields render their own error slot (`<field>-error`) so validation
//! messages always have a place to land; buttons carry the busy/sending
//! presentation.

mod button;
mod input;
mod live_region;

pub use button::*;
pub use input::*;
pub use live_region::*;
