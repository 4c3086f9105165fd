//! Token instance data structures.

use serde::{Deserialize, Serialize};

/// One placed occurrence of a token type inside a composition variant.
///
/// Identity is positional: two instances of the same type are distinct
/// objects, and an instance's position is its index within the owning
/// sequence. The token type is an opaque identifier — it does not have to
/// exist in the [`TokenCatalog`](crate::catalog::TokenCatalog). Unknown
/// types are preserved through editing and serialization; only the icon
/// lookup comes up empty for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInstance {
    /// Token type identifier (e.g., "loco", "car")
    pub token_type: String,
}

impl TokenInstance {
    /// Creates a new instance of the given token type.
    pub fn new(token_type: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_instance_new() {
        let token = TokenInstance::new("loco");
        assert_eq!(token.token_type, "loco");
    }

    #[test]
    fn test_token_instances_of_same_type_are_distinct_objects() {
        let a = TokenInstance::new("car");
        let b = TokenInstance::new("car");
        // Equal by value, but each occupies its own position in a sequence.
        assert_eq!(a, b);
    }
}
