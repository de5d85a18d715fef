//! Type-tagged payloads whose concrete value is resolved after decoding.

use ibc_genesis_proto::google::protobuf::Any;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque protobuf `Any` together with the concrete value it resolved to.
///
/// Decoding a genesis document only yields the `Any`; the cached value is
/// filled in by an unpacking pass (see
/// [`AnyUnpacker`](crate::core::ics02_client::registry::AnyUnpacker)).
/// Equality and serialization only look at the `Any`.
#[derive(Clone, Debug)]
pub struct CachedAny<T> {
    any: Any,
    cached: Option<T>,
}

impl<T> CachedAny<T> {
    /// Wraps a payload that has not been resolved yet.
    pub fn new(any: Any) -> Self {
        Self { any, cached: None }
    }

    /// Wraps an already resolved value, packing it into its `Any` form.
    pub fn packed(value: T) -> Self
    where
        T: Clone + Into<Any>,
    {
        Self {
            any: value.clone().into(),
            cached: Some(value),
        }
    }

    pub fn any(&self) -> &Any {
        &self.any
    }

    pub fn type_url(&self) -> &str {
        &self.any.type_url
    }

    /// The resolved value, if an unpacking pass has succeeded on this payload.
    pub fn cached_value(&self) -> Option<&T> {
        self.cached.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.cached.is_some()
    }

    /// Resolves the payload with `unpack` and caches the result.
    ///
    /// A failed resolution leaves any previously cached value untouched.
    pub fn unpack_with<E, F>(&mut self, unpack: F) -> Result<&T, E>
    where
        F: FnOnce(&Any) -> Result<T, E>,
    {
        let value = unpack(&self.any)?;
        Ok(self.cached.insert(value))
    }

    pub fn into_any(self) -> Any {
        self.any
    }
}

impl<T> From<Any> for CachedAny<T> {
    fn from(any: Any) -> Self {
        Self::new(any)
    }
}

impl<T> From<CachedAny<T>> for Any {
    fn from(value: CachedAny<T>) -> Self {
        value.any
    }
}

impl<T> PartialEq for CachedAny<T> {
    fn eq(&self, other: &Self) -> bool {
        self.any == other.any
    }
}

impl<T> Eq for CachedAny<T> {}

impl<T> Serialize for CachedAny<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.any.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for CachedAny<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Any::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn any(type_url: &str) -> Any {
        Any {
            type_url: type_url.to_string(),
            value: vec![1, 2, 3],
        }
    }

    #[test]
    fn unpack_caches_value() {
        let mut payload = CachedAny::<u8>::new(any("/test.Value"));
        assert!(!payload.is_resolved());

        let value = payload
            .unpack_with(|any| Ok::<_, ()>(any.value.len() as u8))
            .unwrap();
        assert_eq!(*value, 3);
        assert_eq!(payload.cached_value(), Some(&3));
    }

    #[test]
    fn failed_unpack_keeps_payload_unresolved() {
        let mut payload = CachedAny::<u8>::new(any("/test.Value"));
        assert!(payload.unpack_with(|_| Err("unregistered")).is_err());
        assert!(payload.cached_value().is_none());
        assert_eq!(payload.type_url(), "/test.Value");
    }

    #[test]
    fn equality_ignores_cache() {
        let mut resolved = CachedAny::<u8>::new(any("/test.Value"));
        resolved.unpack_with(|_| Ok::<_, ()>(1)).unwrap();

        assert_eq!(resolved, CachedAny::new(any("/test.Value")));
        assert_ne!(resolved, CachedAny::new(any("/test.Other")));
    }
}
