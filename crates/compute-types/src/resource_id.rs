// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Helpers for resource identifiers and blob URIs.
//!
//! Both ARM resource IDs
//! (`/subscriptions/../providers/Microsoft.Compute/disks/foo`) and storage
//! URIs (`https://acct.blob.core.windows.net/snapshots/bar`) end in
//! `<type>/<name>`, which is all these helpers look at.

fn segments(id: &str) -> impl DoubleEndedIterator<Item = &str> {
    let path = id.split(['?', '#']).next().unwrap_or(id);
    path.split('/').filter(|s| !s.is_empty())
}

/// The final segment of `id`, i.e. the resource's own name.
pub fn resource_name(id: &str) -> Option<&str> {
    segments(id).next_back()
}

/// The segment preceding the name, i.e. the resource type collection
/// (`disks`, `snapshots`, ...). Case is preserved.
pub fn resource_type(id: &str) -> Option<&str> {
    segments(id).nth_back(1)
}

/// Whether the resource type of `id` equals `expected`, ignoring ASCII case.
pub fn is_resource_type(id: &str, expected: &str) -> bool {
    resource_type(id).is_some_and(|t| t.eq_ignore_ascii_case(expected))
}

#[cfg(test)]
mod test {
    use super::*;

    const DISK_ID: &str = "/subscriptions/0000/resourceGroups/rg/providers/\
                           Microsoft.Compute/disks/os-disk";

    #[test]
    fn arm_ids() {
        assert_eq!(resource_type(DISK_ID), Some("disks"));
        assert_eq!(resource_name(DISK_ID), Some("os-disk"));
        assert!(is_resource_type(DISK_ID, "DISKS"));
        assert!(!is_resource_type(DISK_ID, "snapshots"));
    }

    #[test]
    fn blob_uris() {
        let uri = "https://acct.blob.core.windows.net/Snapshots/bar.vhd?sv=1";
        assert_eq!(resource_type(uri), Some("Snapshots"));
        assert_eq!(resource_name(uri), Some("bar.vhd"));
        assert!(is_resource_type(uri, "snapshots"));
    }

    #[test]
    fn trailing_slashes_and_short_ids() {
        assert_eq!(resource_type("/disks/foo/"), Some("disks"));
        assert_eq!(resource_type("foo"), None);
        assert_eq!(resource_type(""), None);
        assert_eq!(resource_name(""), None);
    }
}
