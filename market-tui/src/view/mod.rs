//! View layer - the marketplace page as a headless state machine
//!
//! User actions mutate [`ViewState`] immediately and spawn the matching API
//! call; completions come back as [`ViewEvent`]s and are folded in by
//! [`ViewController::apply`]. Rendering only ever reads the state.

mod controller;
mod event;
mod notice;
mod state;

pub use controller::{FAILED_TO_LOAD_ACTIVITIES, UNKNOWN_ERROR, ViewController};
pub use event::ViewEvent;
pub use notice::{NOTICE_DURATION, NoticeTimer};
pub use state::{FilterField, FilterInputs, Section, SectionStatus, ViewState};
