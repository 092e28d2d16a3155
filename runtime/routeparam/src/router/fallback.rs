use super::AllowedMethods;
use crate::http::header::ALLOW;
use crate::response::Response;

/// The response returned for requests that don't reach any pipeline.
///
/// It returns a `404 Not Found` response if the path doesn't match any of the
/// registered URL templates (i.e. `allowed_methods` is empty).
/// It returns a `405 Method Not Allowed` response, with the `Allow` header set,
/// if the path matches a registered template but the method doesn't.
pub fn default_fallback(allowed_methods: &AllowedMethods) -> Response {
    if let Some(header_value) = allowed_methods.allow_header_value() {
        Response::method_not_allowed()
            .insert_header(ALLOW, header_value)
            .box_body()
    } else {
        Response::not_found().box_body()
    }
}
