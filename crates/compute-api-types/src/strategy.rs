// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value generators shared by the models' round-trip tests.

use chrono::{FixedOffset, TimeZone};
use compute_types::{ExpandableEnum, Timestamp};
use proptest::prelude::*;

/// Up to the end of 2099.
const MAX_SECS: i64 = 4_102_444_800;

/// An optional free-form string, including the empty string.
pub(crate) fn text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ -~]{0,16}")
}

/// An optional list of length zero, one or several.
pub(crate) fn list<S: Strategy>(
    element: S,
) -> impl Strategy<Value = Option<Vec<S::Value>>> {
    prop::option::of(prop::collection::vec(element, 0..4))
}

/// A well-known value of an open enumeration, or one it has never seen.
pub(crate) fn expandable<E: ExpandableEnum + std::fmt::Debug>(
    known: &'static [&'static str],
) -> impl Strategy<Value = E> {
    prop_oneof![
        prop::sample::select(known).prop_map(E::from_string),
        "[A-Za-z_/]{1,12}".prop_map(|s| E::from_string(&s)),
    ]
}

/// A timestamp with any whole-minute offset under a day and any
/// sub-second precision down to nanoseconds.
pub(crate) fn timestamp() -> impl Strategy<Value = Timestamp> {
    (
        0..MAX_SECS,
        prop_oneof![
            Just(0u32),
            (0..1_000u32).prop_map(|ms| ms * 1_000_000),
            (0..1_000_000u32).prop_map(|us| us * 1_000),
            0..1_000_000_000u32,
        ],
        -(23 * 60 + 59)..=(23 * 60 + 59),
    )
        .prop_filter_map("representable", |(secs, nanos, minutes)| {
            FixedOffset::east_opt(minutes * 60)?
                .timestamp_opt(secs, nanos)
                .single()
        })
}
