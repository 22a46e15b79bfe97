pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod intersect;
pub mod layout;
pub mod listeners;
pub mod surface;
pub mod types;

pub use document::{Document, ScrollRecord};
pub use element::{Content, Element, Tag};
pub use error::SurfaceError;
pub use event::{Event, EventKind, ScrollBehavior, ScrollBlock, Target};
pub use intersect::{is_intersecting, RootMargin};
pub use layout::Rect;
pub use listeners::{ListenerId, Listeners};
pub use surface::Surface;
pub use types::*;
