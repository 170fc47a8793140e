use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A provider-native message that the exchange carries without
/// interpreting it.
///
/// The vocabulary this crate defines may lose context for the model:
/// for example, a service that requested a tool invocation typically
/// needs its own assistant message structure echoed back verbatim in
/// the follow-up request. `OpaqueMessage` lets a provider stash that
/// structure in the transcript and recover it when the next request is
/// serialized.
#[derive(Clone)]
pub struct OpaqueMessage {
    id: String,
    value: Arc<dyn Any + Send + Sync>,
}

impl OpaqueMessage {
    /// Creates a new `OpaqueMessage`.
    ///
    /// The `id` identifies the message and should be unique across the
    /// transcript; equality and hashing only look at the `id`.
    #[inline]
    pub fn new<ID: Into<String>, T: Send + Sync + 'static>(
        id: ID,
        value: T,
    ) -> Self {
        Self {
            id: id.into(),
            value: Arc::new(value),
        }
    }

    /// Returns the identifier of this message.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Recovers the raw value, if it has type `T`.
    #[inline]
    pub fn to_raw<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

impl Debug for OpaqueMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueMessage").field("id", &self.id).finish()
    }
}

impl PartialEq for OpaqueMessage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OpaqueMessage {}

impl Hash for OpaqueMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[derive(Clone)]
    struct NativeMessage(String);

    #[test]
    fn test_recover_raw_value() {
        let opaque = OpaqueMessage::new("msg:0", NativeMessage("Hi".into()));
        assert_eq!(opaque.to_raw::<NativeMessage>().unwrap().0, "Hi");
        // A mismatched type yields nothing.
        assert!(opaque.to_raw::<String>().is_none());
    }

    #[test]
    fn test_identity_is_the_id() {
        let opaque_0 = OpaqueMessage::new("msg:0", NativeMessage("a".into()));
        let opaque_1 = OpaqueMessage::new("msg:1", NativeMessage("b".into()));
        let opaque_0_clone = opaque_0.clone();
        assert_eq!(opaque_0, opaque_0_clone);
        assert_ne!(opaque_0, opaque_1);

        let mut set = HashSet::new();
        set.insert(opaque_0);
        set.insert(opaque_0_clone);
        set.insert(opaque_1);
        assert_eq!(set.len(), 2);
    }
}
