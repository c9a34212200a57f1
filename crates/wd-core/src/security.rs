use std::fmt;
use zeroize::Zeroize;

/// A sensitive string that must never be logged or serialized.
///
/// Unlike a plain `String`:
/// - no `Serialize` / `Deserialize`
/// - no `Debug` / `Display` output of the real content
/// - memory is zeroed on drop
///
/// It is `Clone` + `PartialEq` because the registration draft that holds it
/// lives inside cloneable state-machine states.
#[derive(Default)]
pub struct Secret {
    inner: String,
}

impl Secret {
    /// Create a new Secret.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the inner secret as &str.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Consume and return the inner String.
    pub fn into_inner(mut self) -> String {
        let mut tmp = String::new();
        std::mem::swap(&mut self.inner, &mut tmp);
        tmp
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/* ===========================
 * Trait implementations
 * ===========================
 */

impl Clone for Secret {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Secret {}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
