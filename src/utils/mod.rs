pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{STORE_FILE_EXTENSION, STORE_SUBDIR, default_store_dir};
pub use paths::{format_path_with_tilde, validate_file_size};
pub use terminal::sanitize_for_terminal;
