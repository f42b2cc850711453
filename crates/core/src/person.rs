use core::fmt;

use crate::prototype::Prototype;

/// A person with a name and an age.
///
/// No validation is applied: any name and any `i32` age (including negative
/// values) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}

impl Prototype for Person {
    fn clone_prototype(&self) -> Self {
        tracing::trace!(name = %self.name, age = self.age, "cloning person");
        Person::new(self.name.as_str(), self.age)
    }
}

/// Human-readable form, e.g. `Name: John Doe, Age: 30`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Person {
        Person::new("John Doe", 30)
    }

    #[test]
    fn display_formats_name_and_age() {
        assert_eq!(john().to_string(), "Name: John Doe, Age: 30");
        assert_eq!(Person::new("", -4).to_string(), "Name: , Age: -4");
    }

    #[test]
    fn clone_prototype_copies_fields() {
        let original = john();
        let copy = original.clone_prototype();

        assert_eq!(copy.name(), "John Doe");
        assert_eq!(copy.age(), 30);
        assert_eq!(copy, original);
    }

    #[test]
    fn clone_prototype_does_not_alias_name_storage() {
        let original = john();
        let copy = original.clone_prototype();
        assert_ne!(original.name().as_ptr(), copy.name().as_ptr());
    }

    #[test]
    fn clone_prototype_agrees_with_clone() {
        let original = Person::new("Ada", 36);
        assert_eq!(original.clone_prototype(), original.clone());
    }

    #[test]
    fn mutating_the_clone_leaves_the_original_untouched() {
        let original = john();
        let mut copy = original.clone_prototype();

        copy.set_name("Jane Doe");
        copy.set_age(25);

        assert_eq!(copy.to_string(), "Name: Jane Doe, Age: 25");
        assert_eq!(original.to_string(), "Name: John Doe, Age: 30");
    }

    #[test]
    fn mutating_the_original_leaves_the_clone_untouched() {
        let mut original = john();
        let copy = original.clone_prototype();

        original.set_name("Someone Else");
        original.set_age(99);

        assert_eq!(copy, john());
    }

    #[test]
    fn clones_can_be_cloned_again() {
        let first = john();
        let second = first.derive_with(|p| p.set_age(31));
        let third = second.derive_with(|p| p.set_name("Johnny"));

        assert_eq!(first.to_string(), "Name: John Doe, Age: 30");
        assert_eq!(second.to_string(), "Name: John Doe, Age: 31");
        assert_eq!(third.to_string(), "Name: Johnny, Age: 31");
    }

    #[test]
    fn negative_age_is_accepted() {
        let p = Person::new("Benjamin", -1);
        assert_eq!(p.age(), -1);
        assert_eq!(p.clone_prototype().age(), -1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a fresh clone has the same name and age as its source.
            #[test]
            fn clone_preserves_fields(name in ".{0,64}", age in any::<i32>()) {
                let original = Person::new(name.clone(), age);
                let copy = original.clone_prototype();

                prop_assert_eq!(copy.name(), name.as_str());
                prop_assert_eq!(copy.age(), age);
            }

            /// Property: mutating the clone never changes the original.
            #[test]
            fn clone_is_independent(
                name in ".{0,64}",
                age in any::<i32>(),
                new_name in ".{0,64}",
                new_age in any::<i32>()
            ) {
                let original = Person::new(name.clone(), age);
                let mut copy = original.clone_prototype();

                copy.set_name(new_name.clone());
                copy.set_age(new_age);

                prop_assert_eq!(original.name(), name.as_str());
                prop_assert_eq!(original.age(), age);
                prop_assert_eq!(copy.name(), new_name.as_str());
                prop_assert_eq!(copy.age(), new_age);
            }

            /// Property: rendering an unmutated person is stable.
            #[test]
            fn display_is_stable(name in ".{0,64}", age in any::<i32>()) {
                let p = Person::new(name, age);
                let first = p.to_string();
                let second = p.to_string();
                prop_assert_eq!(first, second);
            }
        }
    }
}
