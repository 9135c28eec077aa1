pub mod identity_response;

pub use identity_response::*;
