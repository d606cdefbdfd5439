pub mod environment;

pub use environment::{DATA_DIR_ENV, get_data_dir};
