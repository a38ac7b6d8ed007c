//! Identity capability for domain types.

use crate::curie::Curie;

/// Anything with a unique compact identifier.
///
/// Domain types hold a [`Curie`] field and expose it through this trait.
///
/// # Examples
///
/// ```
/// use curie::{Curie, Identity};
///
/// struct Person {
///     id: Curie,
///     name: String,
/// }
///
/// impl Identity for Person {
///     fn identity(&self) -> &Curie {
///         &self.id
///     }
/// }
///
/// let person = Person {
///     id: Curie::new("person", "alice"),
///     name: "Alice".to_string(),
/// };
/// assert_eq!(person.identity().scheme(), "person");
/// ```
pub trait Identity {
    /// Returns the identifier of this thing.
    fn identity(&self) -> &Curie;
}

impl Identity for Curie {
    fn identity(&self) -> &Curie {
        self
    }
}
