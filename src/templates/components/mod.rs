pub mod error;
pub mod flash;

pub use error::html_error_response;
pub use flash::{flash_banner, Flash};
