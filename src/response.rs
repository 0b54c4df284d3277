//! Response types for Alpha Vantage API

/// Trait for HTTP response objects
pub trait Response {
    /// Get the HTTP status code
    fn status(&self) -> u16;

    /// Get the response body as a string
    fn body(&self) -> &str;

    /// The ID of the corresponding request, if the server reported one
    fn request_id(&self) -> Option<&str>;

    /// Whether the status is the plain `200 OK` Alpha Vantage uses for data
    fn is_ok(&self) -> bool {
        self.status() == 200
    }
}
