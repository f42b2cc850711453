//! Prototype trait: create new instances by copying an existing one.
//!
//! Callers that hold a prototype can derive new values from it without knowing
//! how the type is constructed.

/// Capability of producing an independent copy of `self`.
///
/// ## Contract
///
/// - The copy's observable fields equal the receiver's at the time of the call.
/// - The copy shares **no mutable state** with the receiver: mutating either one
///   is never observable through the other.
/// - Cloning is total and has no side effects on the receiver.
///
/// ## Relation to `Clone`
///
/// `Clone` is the language-level copy; `Prototype` is the domain operation and
/// is what generic "derive from an existing instance" code should bound on.
/// The method is named `clone_prototype` so that types implementing both
/// traits never hit an ambiguous `.clone()` call.
///
/// ## Usage Pattern
///
/// ```
/// use prototype_core::{Person, Prototype};
///
/// let template = Person::new("John Doe", 30);
/// let copy = template.derive_with(|p| p.set_age(31));
///
/// assert_eq!(template.age(), 30);
/// assert_eq!(copy.age(), 31);
/// ```
pub trait Prototype: Sized {
    /// Returns a new instance built from the receiver's current state.
    fn clone_prototype(&self) -> Self;

    /// Clone the receiver and apply `edit` to the copy only.
    fn derive_with<F>(&self, edit: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut copy = self.clone_prototype();
        edit(&mut copy);
        copy
    }
}
