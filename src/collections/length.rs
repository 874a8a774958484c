use std::num::NonZero;

/// The length of a non-empty collection.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        Length::wrap_non_zero(self.0.checked_add(other))
    }

    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        Length::wrap_non_zero(match self.0.get().checked_sub(other) {
            Some(res) => NonZero::new(res),
            None => None,
        })
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn wrap_non_zero(value: Option<NonZero<usize>>) -> Option<Length> {
        match value {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_never_zero() {
        assert_eq!(ONE.get(), 1);
        assert_eq!(ONE.checked_sub(1), None, "Subtracting to zero should yield no length.");
        assert_eq!(ONE.checked_add(2).map(Length::get), Some(3));
        assert_eq!(
            Length::wrap_non_zero(NonZero::new(usize::MAX)).and_then(|len| len.checked_add(1)),
            None,
            "Overflowing a length should yield no length."
        );
    }
}
