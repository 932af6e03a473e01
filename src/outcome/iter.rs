use crate::outcome::core::Outcome;
use crate::sequence::lazy::process_outcomes;

/// Borrowing iterator over the success value of an [`Outcome`].
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over the success value of an [`Outcome`].
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over the success value of an [`Outcome`].
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_success(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success value (zero or one item).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_success(),
        }
    }

    /// Mutably iterates over the success value (zero or one item).
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut().into_success(),
        }
    }
}

/// Collects outcomes fail-fast: the source is not pulled past the first failure.
///
/// # Examples
///
/// ```
/// use sequence_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first_bad: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_bad, Outcome::Failure("a"));
/// ```
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        process_outcomes(iter, |values| values.collect())
    }
}

/// Same as the `Outcome` collection, for sources yielding standard [`Result`]s.
impl<T, E, V> FromIterator<Result<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        process_outcomes(iter.into_iter().map(Outcome::from), |values| values.collect())
    }
}
