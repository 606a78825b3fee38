/// Outcome of one remote call.
///
/// Remote failures are data, not errors: a non-2xx status lands here with
/// `data: None` and whatever message the service supplied. Callers inspect
/// the response instead of catching errors for expected remote conditions.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn success(status_code: u16, data: T) -> Self {
        Self {
            status_code,
            data: Some(data),
            error: None,
        }
    }

    pub(crate) fn failure(status_code: u16, error: Option<String>) -> Self {
        Self {
            status_code,
            data: None,
            error,
        }
    }

    /// True when the service answered with a 2xx status.
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
