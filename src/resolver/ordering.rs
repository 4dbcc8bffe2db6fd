//! Final rendering order.

use std::cmp::Ordering;

use crate::models::NamedDependency;

/// Rendering order: version symbol, then coordinate symbol.
///
/// Coordinate symbols are unique after resolution, so this is a total order
/// and the result does not depend on input order.
pub fn render_order(a: &NamedDependency, b: &NamedDependency) -> Ordering {
    a.symbol_name
        .cmp(&b.symbol_name)
        .then_with(|| a.coordinate_symbol_name.cmp(&b.coordinate_symbol_name))
}

/// Stable sort by [`render_order`].
pub fn order(mut dependencies: Vec<NamedDependency>) -> Vec<NamedDependency> {
    dependencies.sort_by(render_order);
    dependencies
}
