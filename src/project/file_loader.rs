mod collection;
mod parsing;

// Re-export core file loading functions
pub use collection::{SCRIPT_EXTENSIONS, collect_file_paths, collect_file_paths_with};
pub use parsing::{get_extension, load_file, load_file_with, validate_extension};
