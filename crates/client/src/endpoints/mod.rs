//! REST API endpoint implementations.

mod objects;
mod request;
pub mod url_encoding;

pub use objects::{create_object, list_objects};
pub use request::send_request;
pub use url_encoding::encode_path_segment;
