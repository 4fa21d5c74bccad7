pub mod document;
pub mod element;
pub mod event;
pub mod html;
pub mod query;

pub use document::{DispatchError, Dispatched, Document, Listener, ListenerError};
pub use element::{Content, Element, Tag};
pub use event::{Event, MouseButton};
pub use html::{to_html, to_html_with, HtmlOptions};
pub use query::{
    element_at, element_at_mut, find_element, find_element_mut, inner_text, path_to, query_all,
    sibling_index, text_content,
};
