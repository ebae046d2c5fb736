pub mod paths;
pub mod terminal;

pub use paths::{MAX_DOCUMENT_BYTES, ensure_within_document_limit, expand_tilde, format_path_with_tilde};
pub use terminal::sanitize_for_terminal;
