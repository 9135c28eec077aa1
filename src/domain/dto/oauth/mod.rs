pub mod oauth_request;
pub mod oauth_response;

pub use oauth_request::*;
pub use oauth_response::*;
