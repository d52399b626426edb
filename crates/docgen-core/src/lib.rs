pub mod catalog;
pub mod emitter;
pub mod error;
pub mod io;
pub mod layout;
pub mod templates;

pub use catalog::{Catalog, Document, DocumentKind};
pub use emitter::{Emitter, GenerateReport, WrittenDocument};
pub use error::{DocgenError, Result};
pub use layout::Layout;
