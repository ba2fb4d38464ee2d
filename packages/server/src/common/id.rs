//! Typed opaque-string identifiers for compile-time type safety.
//!
//! This module provides `Id<T>`, a typed wrapper around an opaque `String`
//! identifier that prevents accidentally mixing up different ID types (e.g.
//! passing a `SellerId` where a `ListingId` was expected).
//!
//! Listing identifiers arrive from seed data and API clients as opaque
//! strings, so the wrapper is string-backed rather than UUID-backed. Freshly
//! minted IDs use UUID v7 text (time-ordered), which keeps newly created
//! records naturally sorted by creation time.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::id::Id;
//!
//! // Define entity marker types
//! pub struct Listing;
//! pub struct Seller;
//!
//! // Create type aliases
//! pub type ListingId = Id<Listing>;
//! pub type SellerId = Id<Seller>;
//!
//! // These are now incompatible types:
//! let listing_id = ListingId::new();
//! let seller_id = SellerId::new();
//!
//! // This would be a compile error:
//! // let wrong: SellerId = listing_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// A typed wrapper around an opaque string identifier.
///
/// The type parameter `T` represents the entity type this ID belongs to.
///
/// # Type Safety
///
/// IDs with different `T` parameters are incompatible at compile time:
///
/// ```compile_fail
/// use server_core::common::id::Id;
///
/// struct Buyer;
/// struct Seller;
///
/// let buyer_id: Id<Buyer> = Id::new();
/// let seller_id: Id<Seller> = buyer_id; // Compile error!
/// ```
#[repr(transparent)]
pub struct Id<T>(String, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// Mints a fresh ID (UUID v7 text, time-ordered).
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string(), PhantomData)
    }

    /// Creates an `Id` from an existing opaque string.
    ///
    /// This is the primary way to adopt IDs arriving from seed data or
    /// request paths. The string is taken as-is; emptiness is rejected by
    /// entity validation, not here.
    #[inline]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into(), PhantomData)
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID, returning the inner `String`.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the identifier is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

// Manual impls: derives would incorrectly bound `T`.

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> AsRef<str> for Id<T> {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<T> From<String> for Id<T> {
    #[inline]
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl<T> From<&str> for Id<T> {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl<T> From<Id<T>> for String {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::convert::Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_string)
    }
}
