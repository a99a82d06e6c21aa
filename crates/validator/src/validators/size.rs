//! Collection size validators
//!
//! [`Collection`] abstracts "how many elements" over the standard containers
//! so one [`NotEmpty`] validator covers slices, vectors, sets and maps.

use crate::foundation::{Validate, ValidationError};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;

// ============================================================================
// COLLECTION
// ============================================================================

/// Containers with a known element count.
pub trait Collection {
    /// Number of elements held.
    fn element_count(&self) -> usize;
}

impl<T> Collection for [T] {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn element_count(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for BTreeSet<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<C> Collection for &C
where
    C: Collection + ?Sized,
{
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a [`Collection`] has at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmpty<C: ?Sized> {
    _phantom: PhantomData<fn(&C)>,
}

impl<C> Validate for NotEmpty<C>
where
    C: Collection + ?Sized,
{
    type Input = C;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.element_count() == 0 {
            Err(ValidationError::new(
                "not_empty",
                "Collection must have at least one element",
            ))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`NotEmpty`] validator.
///
/// # Examples
///
/// ```rust,ignore
/// use chainval::validators::not_empty;
/// use chainval::foundation::Validate;
///
/// let validator = not_empty::<[i32]>();
/// assert!(validator.validate(&[1, 2, 3]).is_ok());
/// assert!(validator.validate(&[]).is_err());
/// ```
#[must_use]
pub fn not_empty<C: ?Sized>() -> NotEmpty<C> {
    NotEmpty {
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_slice() {
        assert!(not_empty::<[i32]>().validate(&[1, 2, 3]).is_ok());
        assert!(not_empty::<[i32]>().validate(&[]).is_err());
    }

    #[test]
    fn test_not_empty_vec() {
        assert!(not_empty().validate(&vec!["a"]).is_ok());
        assert!(not_empty().validate(&Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_not_empty_map() {
        let mut map = HashMap::new();
        assert!(not_empty().validate(&map).is_err());
        map.insert("k", 1);
        assert!(not_empty().validate(&map).is_ok());
    }

    #[test]
    fn test_error_code() {
        let error = not_empty().validate(&BTreeSet::<u8>::new()).unwrap_err();
        assert_eq!(error.code, "not_empty");
    }
}
