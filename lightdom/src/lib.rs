pub mod document;
pub mod element;
pub mod event;
pub mod html;

pub use document::{Document, DomError};
pub use element::{find_element, find_element_mut, Content, Element, Tag};
pub use event::Event;
