//! The reverse operation under test: URI back to variables.

use indexmap::IndexMap;

use crate::expander::BoxError;

/// Variable values recovered from a URI, by name.
pub type Extracted = IndexMap<String, String>;

/// A URI template variable extraction implementation.
///
/// `Ok(None)` means the URI does not match the template. Like [`Expander`],
/// any `Fn(&str, &str) -> Result<Option<Extracted>, E>` qualifies.
///
/// [`Expander`]: crate::Expander
pub trait Extractor: Send + Sync {
    fn extract(&self, template: &str, uri: &str) -> Result<Option<Extracted>, BoxError>;
}

impl<F, E> Extractor for F
where
    F: Fn(&str, &str) -> Result<Option<Extracted>, E> + Send + Sync,
    E: Into<BoxError>,
{
    fn extract(&self, template: &str, uri: &str) -> Result<Option<Extracted>, BoxError> {
        self(template, uri).map_err(Into::into)
    }
}
