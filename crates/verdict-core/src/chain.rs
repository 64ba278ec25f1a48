use std::any::Any;
use std::error::Error;
use std::fmt;

/// Owned, type-erased error that can cross task boundaries
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Box a cause for storage inside a decorator
///
/// Plain errors and strings are boxed as usual. An [`anyhow::Error`] boxed
/// the usual way hides the error it carries from [`links`], so it is kept
/// in a link whose source is that inner error instead.
pub fn into_cause<C>(cause: C) -> BoxError
where
    C: Into<BoxError> + 'static,
{
    let mut slot = Some(cause);
    let any: &mut dyn Any = &mut slot;

    if let Some(err) = any.downcast_mut::<Option<anyhow::Error>>().and_then(Option::take) {
        return Box::new(AnyhowLink(err));
    }

    slot.map_or_else(|| unreachable!("only anyhow errors leave the slot"), Into::into)
}

/// Chain link owning an `anyhow::Error`
struct AnyhowLink(anyhow::Error);

impl fmt::Debug for AnyhowLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for AnyhowLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for AnyhowLink {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let inner: &(dyn Error + 'static) = self.0.as_ref();
        Some(inner)
    }
}

/// Iterate an error and each of its causes, outermost first
pub fn links<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&link| link.source())
}

/// Find the nearest link in the chain whose concrete type is `T`
///
/// The walk starts at `err` itself, so a decoration layered on top shadows
/// any older decoration of the same type further down the chain.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    links(err).find_map(|link| link.downcast_ref::<T>())
}

/// Innermost error of the chain
pub fn root<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    links(err).last().unwrap_or(err)
}

/// Render the chain as `outer: inner: root` for logs
///
/// Decorators display exactly like their cause, so adjacent identical
/// entries are collapsed.
pub fn render(err: &(dyn Error + 'static)) -> String {
    let mut parts: Vec<String> = links(err).map(ToString::to_string).collect();
    parts.dedup();
    parts.join(": ")
}
