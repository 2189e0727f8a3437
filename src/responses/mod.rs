pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{html_error_response, ResultResp};

// Normal HTML response
pub use html::html_response;
pub use redirect::{hx_redirect, no_content, redirect};
