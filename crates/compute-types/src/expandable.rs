// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! String-valued enumerations whose value set is open.
//!
//! The server can start sending a new power state or SKU name before the
//! client learns about it. Rather than failing to decode, every such
//! enumeration is a thin wrapper around its canonical wire string. The
//! well-known values are associated constants; anything else is interned in
//! the family's [`Registry`] the first time it is seen and behaves exactly
//! like a well-known value from then on.
//!
//! Interned strings are leaked: registrations live for the rest of the
//! process, and each distinct string is leaked at most once per family.

use crate::registry::Registry;

/// An enumeration family backed by a string [`Registry`].
///
/// Implementations are generated by [`expandable_enum!`](crate::expandable_enum).
pub trait ExpandableEnum: Copy + Sized + 'static {
    /// The family's registry, keyed by exact canonical string.
    fn registry() -> &'static Registry<&'static str>;

    /// Wraps an already-interned canonical string.
    #[doc(hidden)]
    fn from_interned(canonical: &'static str) -> Self;

    /// The canonical wire string, exactly as it was first registered.
    fn as_str(&self) -> &'static str;

    /// Returns the singleton for `value`, registering it if it has not been
    /// seen before. Matching is exact and case-sensitive.
    fn from_string(value: &str) -> Self {
        let canonical = Self::registry().get_or_insert_with(value, || {
            Box::leak(value.to_owned().into_boxed_str())
        });
        Self::from_interned(canonical)
    }

    /// Like [`ExpandableEnum::from_string`], but passes `None` through
    /// without touching the registry.
    fn from_optional(value: Option<&str>) -> Option<Self> {
        value.map(Self::from_string)
    }

    /// Every value registered so far for this family: the well-known
    /// constants plus anything learned at runtime. The set can keep growing.
    fn values() -> Vec<Self> {
        Self::registry().values().into_iter().map(Self::from_interned).collect()
    }
}

/// Declares an open-ended string enumeration.
///
/// ```ignore
/// expandable_enum! {
///     /// Whether a VM is on or off.
///     pub struct PowerState {
///         RUNNING = "PowerState/running",
///         STOPPED = "PowerState/stopped",
///     }
/// }
/// ```
///
/// The generated type is `Copy`, compares and hashes by canonical string,
/// renders that string unchanged through `Display` and serde, and never
/// fails to parse.
#[macro_export]
macro_rules! expandable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(&'static str);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self($value);
            )*

            /// The canonical strings known at compile time.
            pub const KNOWN: &'static [&'static str] = &[$($value),*];

            /// The canonical wire string.
            pub fn as_str(&self) -> &'static str {
                self.0
            }

            /// Returns the singleton for `value`, registering it if needed.
            pub fn from_string(value: &str) -> Self {
                <Self as $crate::ExpandableEnum>::from_string(value)
            }

            /// Every value registered for this family so far.
            pub fn values() -> ::std::vec::Vec<Self> {
                <Self as $crate::ExpandableEnum>::values()
            }

            fn registry_seed(
            ) -> ::std::vec::Vec<(::std::string::String, &'static str)> {
                Self::KNOWN.iter().map(|v| ((*v).to_owned(), *v)).collect()
            }
        }

        impl $crate::ExpandableEnum for $name {
            fn registry() -> &'static $crate::Registry<&'static str> {
                static REGISTRY: $crate::Registry<&'static str> =
                    $crate::Registry::new(
                        stringify!($name),
                        $name::registry_seed,
                    );
                &REGISTRY
            }

            fn from_interned(canonical: &'static str) -> Self {
                Self(canonical)
            }

            fn as_str(&self) -> &'static str {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                f.write_str(self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from_string(s))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_string(s)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <::std::string::String as
                    $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from_string(&s))
            }
        }

        impl $crate::__private::schemars::JsonSchema for $name {
            fn schema_name() -> ::std::string::String {
                stringify!($name).to_owned()
            }

            fn json_schema(
                _: &mut $crate::__private::schemars::gen::SchemaGenerator,
            ) -> $crate::__private::schemars::schema::Schema {
                use $crate::__private::schemars::schema::*;
                SchemaObject {
                    instance_type: Some(InstanceType::String.into()),
                    metadata: Some(Box::new(Metadata {
                        examples: Self::KNOWN
                            .iter()
                            .map(|v| {
                                $crate::__private::serde_json::Value::from(*v)
                            })
                            .collect(),
                        ..Default::default()
                    })),
                    ..Default::default()
                }
                .into()
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::ExpandableEnum;
    use serde_test::{assert_tokens, Token};

    crate::expandable_enum! {
        /// Test family.
        pub struct Flavor {
            VANILLA = "Vanilla",
            CHOCOLATE = "Chocolate",
        }
    }

    crate::expandable_enum! {
        pub struct OtherFlavor {
            VANILLA = "Vanilla",
        }
    }

    // Only `none_does_not_register` touches this family, so its registry
    // size can't change under it while other tests run.
    crate::expandable_enum! {
        pub struct Sprinkles {
            RAINBOW = "Rainbow",
        }
    }

    #[test]
    fn well_known_values_resolve_to_constants() {
        assert_eq!(Flavor::from_string("Vanilla"), Flavor::VANILLA);
        assert_eq!(Flavor::from_string("Chocolate"), Flavor::CHOCOLATE);
        assert_eq!(Flavor::VANILLA.to_string(), "Vanilla");
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let lower = Flavor::from_string("vanilla");
        assert_ne!(lower, Flavor::VANILLA);
        assert_eq!(lower.as_str(), "vanilla");
    }

    #[test]
    fn unknown_values_are_interned_once() {
        let a = Flavor::from_string("Pistachio");
        let b = Flavor::from_string("Pistachio");
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
        assert!(Flavor::values().contains(&a));
        assert!(Flavor::values().contains(&Flavor::CHOCOLATE));
    }

    #[test]
    fn families_do_not_share_registrations() {
        let _ = Flavor::from_string("Only in Flavor");
        assert!(!OtherFlavor::values()
            .iter()
            .any(|v| v.as_str() == "Only in Flavor"));
        assert_eq!(Flavor::registry().family(), "Flavor");
        assert_eq!(OtherFlavor::registry().family(), "OtherFlavor");
    }

    #[test]
    fn none_does_not_register() {
        assert_eq!(Sprinkles::registry().len(), 1);
        assert_eq!(Sprinkles::from_optional(None), None);
        assert_eq!(Sprinkles::registry().len(), 1);
        assert_eq!(
            Sprinkles::from_optional(Some("Rainbow")),
            Some(Sprinkles::RAINBOW)
        );
        assert_eq!(Sprinkles::registry().len(), 1);
        assert_eq!(Sprinkles::values(), [Sprinkles::RAINBOW]);
    }

    #[test]
    fn concurrent_first_sightings_agree() {
        let seen: Vec<Flavor> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| Flavor::from_string("Rum Raisin")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for flavor in &seen {
            assert!(std::ptr::eq(flavor.as_str(), seen[0].as_str()));
        }
        assert_eq!(
            Flavor::values()
                .iter()
                .filter(|v| v.as_str() == "Rum Raisin")
                .count(),
            1
        );
    }

    #[test]
    fn serializes_as_bare_string() {
        assert_tokens(&Flavor::VANILLA, &[Token::Str("Vanilla")]);
        assert_tokens(&Flavor::from_string("Mint"), &[Token::Str("Mint")]);
    }

    #[test]
    fn parse_never_fails() {
        let parsed: Flavor = "Stracciatella".parse().unwrap();
        assert_eq!(parsed.as_str(), "Stracciatella");
        let parsed: Flavor = "".parse().unwrap();
        assert_eq!(parsed.as_str(), "");
    }
}
