mod content;
mod node;
mod tag;

pub use content::Content;
pub use node::Element;
pub use tag::Tag;
