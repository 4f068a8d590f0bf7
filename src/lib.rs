//! Estate showcase - terminal presenter and contact relay for a real-estate
//! project showcase.
//!
//! The presenter (`estate-showcase`) renders a scroll-driven home page whose
//! progress selects the project on display, a unit browser with a fullscreen
//! interior viewer, an about page and a contact form. The relay
//! (`contact-relay`) validates contact submissions and forwards them to an
//! email provider.

pub mod app;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod i18n;
pub mod platform;
pub mod state;
pub mod ui;
