//! Page-interaction components for Prompt All About It.

pub mod anchor_link;
mod announcer;
mod contact_form;
mod nav_menu;

pub use anchor_link::AnchorLink;
pub use announcer::Announcer;
pub use contact_form::ContactForm;
pub use nav_menu::NavMenu;
