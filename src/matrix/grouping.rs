//! matrix::grouping
//!
//! Bucketing of build units by platform key.
//!
//! # Ordering
//!
//! Group enumeration order is the [`PlatformKey`] ordering (OS in enum
//! order, OS version descending, architecture in enum order); member
//! order within a group is the catalog's stable flattened order. Both
//! orders are load-bearing: they fix matrix emission order and leg
//! naming.

use std::collections::BTreeMap;

use crate::core::catalog::{Catalog, UnitId};
use crate::core::types::PlatformKey;

/// Group all build units by platform key.
///
/// The returned map iterates groups in enumeration order; each group's
/// members keep the catalog's stable order. The groups partition the
/// catalog: disjoint, and their union is every unit.
pub fn group_by_platform(catalog: &Catalog) -> BTreeMap<PlatformKey, Vec<UnitId>> {
    let mut groups: BTreeMap<PlatformKey, Vec<UnitId>> = BTreeMap::new();

    for (id, unit) in catalog.iter() {
        groups.entry(unit.key.clone()).or_default().push(id);
    }

    groups
}
