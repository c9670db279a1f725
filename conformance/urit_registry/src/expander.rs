//! The function under test.

use urit_vectors::Bindings;

/// A boxed error type for expander failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A URI template expansion implementation.
///
/// The registry treats it as a pure black box. Any
/// `Fn(&str, &Bindings) -> Result<String, E>` qualifies:
///
/// ```text
/// fn expand(template: &str, bindings: &Bindings) -> Result<String, MyError> { ... }
/// registry.run("simple_string", &expand)?;
/// ```
pub trait Expander: Send + Sync {
    fn expand(&self, template: &str, bindings: &Bindings) -> Result<String, BoxError>;
}

impl<F, E> Expander for F
where
    F: Fn(&str, &Bindings) -> Result<String, E> + Send + Sync,
    E: Into<BoxError>,
{
    fn expand(&self, template: &str, bindings: &Bindings) -> Result<String, BoxError> {
        self(template, bindings).map_err(Into::into)
    }
}
