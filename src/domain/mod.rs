//! Domain types shared by the wizard, templates, and summary modules.

mod event;
mod form;
mod services;
mod timeline;

pub use event::EventType;
pub use form::FormData;
pub use services::{service_display_name, SERVICE_CATALOG};
pub use timeline::Timeline;
