use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// 303 See Other, used after the reload action so a refresh of the report
/// page never re-triggers the reload.
pub fn see_other(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
