//! Market TUI - terminal front end for the activity marketplace
//!
//! The [`view`] module holds the page logic (filters, loading states,
//! bookings, notices) independent of any terminal; [`app`] and [`ui`] map
//! it onto keys and widgets.

pub mod app;
pub mod config;
pub mod render;
pub mod ui;
pub mod view;

pub use config::Config;
pub use view::{ViewController, ViewEvent, ViewState};
