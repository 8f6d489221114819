pub mod data_view;
pub mod path_processing;

pub use data_view::{DataViewError, load_data_view, overlay_default, parse_data_view, read_data_view};
pub use path_processing::{
    LOG_PATH_ENV, PAGES_PATH_ENV, default_log_path, expand_tilde, is_yaml_path, resolve_pages_path,
};
