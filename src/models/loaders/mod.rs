pub mod toml_loader;

pub use toml_loader::{embedded_content, load_content_file, load_content_folder, parse_content};
