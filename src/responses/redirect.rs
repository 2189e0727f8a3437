// responses/redirect.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Plain browser navigation.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Navigation for an htmx request; htmx follows `HX-Redirect` itself.
pub fn hx_redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("HX-Redirect", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Tells htmx to leave the DOM alone.
pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
