pub mod error;
pub mod logger;
pub mod text;

pub use error::{AppError, Result};
pub use logger::init_logger;
pub use text::{article_names_to_array, is_blank};
