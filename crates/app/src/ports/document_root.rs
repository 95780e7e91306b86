//! Document root port — where theme markers become visible.

use std::rc::Rc;
use std::sync::Arc;

use folio_domain::theme::ThemeMarkers;

/// The element styling rules key off of (the `<html>` element in a browser).
pub trait DocumentRoot {
    /// Replace every theme marker on the root with exactly `markers`.
    ///
    /// Implementations must apply the set in one step: after the call, no
    /// theme marker outside `markers` may remain. Markers that belong to no
    /// theme are left alone.
    fn set_markers(&self, markers: ThemeMarkers);
}

impl<T: DocumentRoot + ?Sized> DocumentRoot for &T {
    fn set_markers(&self, markers: ThemeMarkers) {
        (**self).set_markers(markers);
    }
}

impl<T: DocumentRoot + ?Sized> DocumentRoot for Rc<T> {
    fn set_markers(&self, markers: ThemeMarkers) {
        (**self).set_markers(markers);
    }
}

impl<T: DocumentRoot + ?Sized> DocumentRoot for Arc<T> {
    fn set_markers(&self, markers: ThemeMarkers) {
        (**self).set_markers(markers);
    }
}
