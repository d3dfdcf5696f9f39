/// Gate a value before the registry accepts it.
///
/// [`ThemeIdValidator`](crate::theme::validation::ThemeIdValidator) checks
/// slugged ids and
/// [`DocumentValidator`](crate::theme::validation::DocumentValidator) checks
/// the envelope of a raw theme document. A rejection becomes the reason in
/// a [`LoadError`](crate::common::LoadError); softer problems are left to
/// normalization, which turns them into warnings.
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
