use http::HeaderValue;
use smallvec::SmallVec;

use crate::http::Method;

/// The set of HTTP methods that have a pipeline registered for a given URL template.
///
/// It is used to build the `Allow` header of a `405 Method Not Allowed` response.
#[derive(Debug, Clone, Default)]
pub struct AllowedMethods {
    // Inline room for `GET`, `POST`, `PUT`, `DELETE` and `PATCH`.
    methods: SmallVec<[Method; 5]>,
}

impl AllowedMethods {
    /// Get the number of allowed methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if there are no allowed methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// The value that should be set for the `Allow` header
    /// in a `405 Method Not Allowed` response.
    ///
    /// It returns `None` if there are no allowed methods.
    /// It returns the comma-separated list of allowed methods otherwise.
    pub fn allow_header_value(&self) -> Option<HeaderValue> {
        if self.methods.is_empty() {
            return None;
        }
        let allow_header = self
            .methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(",");
        // Method names are valid tokens, and so is a comma-separated list of them.
        HeaderValue::from_str(&allow_header).ok()
    }
}

impl FromIterator<Method> for AllowedMethods {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        Self {
            methods: SmallVec::from_iter(iter),
        }
    }
}
