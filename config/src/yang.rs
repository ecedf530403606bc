// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! YANG building blocks shared by every model

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A YANG `empty` leaf. Its presence is the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty;

/// A top-level node of a YANG module.
pub trait YangEntity: Serialize + DeserializeOwned + Default {
    /// Name of the top-level element
    const NAME: &'static str;
    /// XML namespace of the module
    const NAMESPACE: &'static str;
    /// Whether the node holds configuration (true) or operational state
    const IS_CONFIG: bool = true;
}

/// A YANG module, known by its XML namespace.
pub trait YangModule {
    const URI: &'static str;
}

/// The `xmlns` attribute of a container that module `M` augments into a
/// tree of another module. It always encodes as the namespace of `M`.
pub struct Xmlns<M>(PhantomData<M>);

impl<M> Default for Xmlns<M> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<M> Clone for Xmlns<M> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<M> PartialEq for Xmlns<M> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<M> Eq for Xmlns<M> {}

impl<M: YangModule> fmt::Debug for Xmlns<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Xmlns({})", M::URI)
    }
}

impl<M: YangModule> Serialize for Xmlns<M> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(M::URI)
    }
}

impl<'de, M> Deserialize<'de> for Xmlns<M> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(d)?;
        Ok(Self::default())
    }
}

/// A YANG container whose only child is a list.
pub trait YangList {
    type Item;
    fn items(&self) -> &[Self::Item];
}

/// Entries of an optional list container, empty when the container is absent.
pub fn entries<L: YangList>(container: Option<&L>) -> &[L::Item] {
    container.map_or(&[], YangList::items)
}

/// Container wrapping a single YANG list.
macro_rules! yang_list {
    ($(#[$meta:meta])* $name:ident, $elem:literal, $item:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            #[serde(rename = $elem, default, skip_serializing_if = "Vec::is_empty")]
            pub items: Vec<$item>,
        }
        impl $crate::yang::YangList for $name {
            type Item = $item;
            fn items(&self) -> &[$item] {
                &self.items
            }
        }
        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self { items }
            }
        }
    };
}

/// YANG enumeration with a closed set of names.
macro_rules! yang_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $yang:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }
        impl $name {
            #[must_use]
            pub fn as_yang(&self) -> &'static str {
                match self {
                    $(Self::$variant => $yang),+
                }
            }
            #[must_use]
            pub fn from_yang(name: &str) -> Option<Self> {
                match name {
                    $($yang => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_yang())
            }
        }
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.as_yang())
            }
        }
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let text = <String as ::serde::Deserialize>::deserialize(d)?;
                Self::from_yang(text.trim()).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        text.trim()
                    ))
                })
            }
        }
    };
}

/// YANG enumeration carried as its numeric code. Names this build does not
/// know decode to [`Self::UNKNOWN`] instead of failing, so that newer devices
/// can still be read.
macro_rules! yang_code {
    ($(#[$meta:meta])* $name:ident { $($konst:ident = $code:literal => $yang:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl $name {
            $(pub const $konst: Self = Self($code);)+
            pub const UNKNOWN: Self = Self(u32::MAX);

            #[must_use]
            pub fn code(self) -> u32 {
                self.0
            }
            #[must_use]
            pub fn yang_name(self) -> Option<&'static str> {
                match self.0 {
                    $($code => Some($yang),)+
                    _ => None,
                }
            }
            #[must_use]
            pub fn from_yang(name: &str) -> Self {
                match name {
                    $($yang => Self::$konst,)+
                    other => other.parse().map_or(Self::UNKNOWN, Self),
                }
            }
        }
        impl From<u32> for $name {
            fn from(code: u32) -> Self {
                Self(code)
            }
        }
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                match self.yang_name() {
                    Some(name) => s.serialize_str(name),
                    None => s.serialize_u32(self.0),
                }
            }
        }
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let text = <String as ::serde::Deserialize>::deserialize(d)?;
                Ok(Self::from_yang(text.trim()))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    yang_enum!(Color { Red => "red", DarkBlue => "dark-blue" });
    yang_code!(Level { LOW = 0 => "low", HIGH = 1 => "high" });
    yang_list!(Colors, "color", Color);

    #[test]
    fn test_yang_enum_names() {
        assert_eq!(Color::DarkBlue.as_yang(), "dark-blue");
        assert_eq!(Color::from_yang("red"), Some(Color::Red));
        assert_eq!(Color::from_yang("green"), None);
        assert_eq!(Color::Red.to_string(), "red");
    }

    #[test]
    fn test_yang_code_lookup() {
        assert_eq!(Level::from_yang("high"), Level::HIGH);
        assert_eq!(Level::from_yang("7"), Level(7));
        assert_eq!(Level::from_yang("medium"), Level::UNKNOWN);
        assert_eq!(Level(7).yang_name(), None);
        assert_eq!(Level::LOW.yang_name(), Some("low"));
    }

    #[test]
    fn test_entries_of_absent_container() {
        let absent: Option<Colors> = None;
        assert!(entries(absent.as_ref()).is_empty());
        let present = Colors::from(vec![Color::Red, Color::DarkBlue]);
        assert_eq!(entries(Some(&present)), &[Color::Red, Color::DarkBlue]);
    }
}
