// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fundamental types shared by the compute model crates.
//!
//! This crate holds the pieces every model type leans on: the process-wide
//! registries backing open-ended string enumerations, the
//! [`expandable_enum!`] macro that declares such an enumeration, the
//! best-effort field and timestamp decoders, and helpers for picking apart
//! resource identifiers. Keeping them here lets the API types crate (and
//! anything else that wants to speak the same wire format) share one
//! definition.

pub mod expandable;
pub mod lenient;
pub mod registry;
pub mod resource_id;
pub mod timestamp;

pub use expandable::ExpandableEnum;
pub use registry::Registry;
pub use timestamp::Timestamp;

// Paths used by `expandable_enum!` so that callers don't have to depend on
// the exact same serde/schemars versions themselves.
#[doc(hidden)]
pub mod __private {
    pub use schemars;
    pub use serde;
    pub use serde_json;
}
