//! Layering of configuration values.
//!
//! A layer of higher precedence is merged onto a base value field by field:
//!
//! - `Option<T>` takes the layer's value when it is `Some`
//! - `String` takes the layer's value when it is non-empty
//! - `Vec<T>` takes the layer's value when it is non-empty
//! - `BTreeMap<K, V>` takes the union, the layer winning on shared keys
//! - records merge each of their fields recursively
//!
//! Record impls are generated with [`impl_overlay!`](crate::impl_overlay).

use std::collections::BTreeMap;

/// A value that can have a higher-precedence layer merged onto it.
pub trait Overlay {
    /// Merges `layer` onto `self`.
    fn overlay(&mut self, layer: &Self);

    /// Consumes `self` and returns it with `layer` merged on top.
    fn overlaid(mut self, layer: &Self) -> Self
    where
        Self: Sized,
    {
        self.overlay(layer);
        self
    }
}

impl<T: Clone> Overlay for Option<T> {
    fn overlay(&mut self, layer: &Self) {
        if let Some(value) = layer {
            *self = Some(value.clone());
        }
    }
}

impl Overlay for String {
    fn overlay(&mut self, layer: &Self) {
        if !layer.is_empty() {
            self.clone_from(layer);
        }
    }
}

impl<T: Clone> Overlay for Vec<T> {
    fn overlay(&mut self, layer: &Self) {
        if !layer.is_empty() {
            self.clone_from(layer);
        }
    }
}

impl<K: Ord + Clone, V: Clone> Overlay for BTreeMap<K, V> {
    fn overlay(&mut self, layer: &Self) {
        for (key, value) in layer {
            self.insert(key.clone(), value.clone());
        }
    }
}

/// Implements [`Overlay`] for a record by overlaying each listed field.
///
/// Fields left out of the list keep the base value.
///
/// ```
/// use release_model::impl_overlay;
/// use release_model::model::Overlay;
///
/// #[derive(Default)]
/// struct Tap {
///     owner: Option<String>,
///     name: Option<String>,
/// }
///
/// impl_overlay!(Tap { owner, name });
///
/// let mut base = Tap { owner: Some("acme".into()), name: Some("tap".into()) };
/// base.overlay(&Tap { owner: None, name: Some("homebrew-tap".into()) });
/// assert_eq!(base.owner.as_deref(), Some("acme"));
/// assert_eq!(base.name.as_deref(), Some("homebrew-tap"));
/// ```
#[macro_export]
macro_rules! impl_overlay {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::model::Overlay for $ty {
            fn overlay(&mut self, layer: &Self) {
                $( $crate::model::Overlay::overlay(&mut self.$field, &layer.$field); )*
            }
        }
    };
}
