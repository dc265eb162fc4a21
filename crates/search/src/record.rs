//! Read-only views over caller-owned records.

use std::fmt::Debug;

/// A record whose text fields can be searched.
///
/// Each record type names its searchable fields with a small `Copy` key
/// (usually an enum), and callers pass the keys that take part in a search.
pub trait Record {
    /// Key naming one text field of the record.
    type Field: Copy + Debug + Send + Sync;

    /// Returns the text of `field`, or `None` when the record has no string
    /// value for it. Fields returning `None` never match.
    fn text(&self, field: Self::Field) -> Option<&str>;
}

/// A record that can take part in "related items" recommendations.
pub trait Recommendable {
    /// Identifier used to exclude the target from its own recommendations.
    type Id: PartialEq;
    /// Category compared for affinity.
    type Category: PartialEq;

    /// Unique identifier.
    fn id(&self) -> &Self::Id;

    /// Category, if the record has one. Records without a category are never
    /// considered to share one.
    fn category(&self) -> Option<&Self::Category>;

    /// Price used for proximity ordering. Records without a price sort last.
    fn price(&self) -> Option<f64>;
}
