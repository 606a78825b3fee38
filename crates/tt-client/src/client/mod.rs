pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod response;

pub use client::Client;
pub use error::{ClientError, Result};
pub use response::ApiResponse;
