mod format;
mod path;

pub use format::{NOT_APPLICABLE, format_opt_size, format_percent, format_size, ratio};
pub use path::{extension_key, to_slash_path};
