use std::borrow::Cow;

use matchit::{Params, ParamsIter};
use percent_encoding::percent_decode_str;

use crate::request::path::errors::DecodeError;

/// The (raw) path parameters bound by the router for an incoming request.
///
/// # What does "raw" mean?
///
/// Path parameters are URL segments, therefore they must comply with the restrictions that
/// apply to the URL itself. In particular, they can only use ASCII characters.
/// Anything else must be [percent-encoded](https://www.w3schools.com/tags/ref_urlencode.ASP):
/// if you want to send "123 456" as a path parameter, it becomes "123%20456".
///
/// `RawPathParams` does **not** perform any percent-decoding.
/// If you send a request to `/test/%31%32%33`, the `RawPathParams` for `/test/{test_id}`
/// will map `test_id` to `%31%32%33`, not to `123`.
/// Use [`EncodedParamValue::decode`] to get the decoded value, or rely on
/// [`get_int_param`](super::get_int_param), which decodes for you.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RawPathParams<'server, 'request>(Params<'server, 'request>);

impl<'server, 'request> RawPathParams<'server, 'request> {
    /// Returns the number of bound path parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the raw value of the first path parameter registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<EncodedParamValue<'request>> {
        self.0.get(key).map(EncodedParamValue::new)
    }

    /// Returns an iterator over the bound path parameters.
    pub fn iter(&self) -> RawPathParamsIter<'_, 'server, 'request> {
        RawPathParamsIter(self.0.iter())
    }

    /// Returns `true` if the matched URL template has no path parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'k, 'v> From<Params<'k, 'v>> for RawPathParams<'k, 'v> {
    fn from(value: Params<'k, 'v>) -> Self {
        Self(value)
    }
}

/// An iterator over the path parameters in [`RawPathParams`].
pub struct RawPathParamsIter<'extractor, 'server, 'request>(
    ParamsIter<'extractor, 'server, 'request>,
);

impl<'server, 'request> Iterator for RawPathParamsIter<'_, 'server, 'request> {
    type Item = (&'server str, EncodedParamValue<'request>);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|(key, value)| (key, EncodedParamValue::new(value)))
    }
}

/// A percent-encoded path parameter value, obtained via [`RawPathParams`].
///
/// Use [`decode`](Self::decode) to get the percent-decoded value.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct EncodedParamValue<'request>(&'request str);

impl<'request> EncodedParamValue<'request> {
    fn new(s: &'request str) -> Self {
        Self(s)
    }

    /// Percent-decode the raw value.
    ///
    /// If the decoded bytes are not valid UTF-8, a [`DecodeError`] is returned.
    pub fn decode(&self) -> Result<Cow<'request, str>, DecodeError> {
        percent_decode_str(self.0)
            .decode_utf8()
            .map_err(|e| DecodeError {
                invalid_raw_segment: self.0.to_owned(),
                source: e,
            })
    }

    /// Get a reference to the underlying percent-encoded string.
    pub fn as_str(&self) -> &'request str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use matchit::Router;

    use super::RawPathParams;

    #[test]
    fn values_are_not_decoded_until_asked() {
        let mut router = Router::new();
        router.insert("/address/{street}/{number}", ()).unwrap();
        let matched = router.at("/address/the%20street/%31%32").unwrap();
        let params = RawPathParams::from(matched.params);

        assert_eq!(params.len(), 2);
        let street = params.get("street").unwrap();
        assert_eq!(street.as_str(), "the%20street");
        assert_eq!(street.decode().unwrap(), "the street");
        assert_eq!(params.get("number").unwrap().decode().unwrap(), "12");
        assert!(params.get("city").is_none());

        let keys: Vec<_> = params.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["street", "number"]);
    }

    #[test]
    fn invalid_utf8_fails_to_decode() {
        let mut router = Router::new();
        router.insert("/address/{street}", ()).unwrap();
        let matched = router.at("/address/dirty%DE~%C7%1FY").unwrap();
        let params = RawPathParams::from(matched.params);

        let err = params.get("street").unwrap().decode().unwrap_err();
        insta::assert_snapshot!(err, @"`dirty%DE~%C7%1FY` is not a well-formed UTF8 string when percent-decoded");
    }

    #[test]
    fn templates_without_parameters_yield_an_empty_set() {
        let mut router = Router::new();
        router.insert("/health", ()).unwrap();
        let matched = router.at("/health").unwrap();
        let params = RawPathParams::from(matched.params);

        assert!(params.is_empty());
        assert_eq!(params.iter().count(), 0);
    }
}
