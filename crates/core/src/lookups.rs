//! Seeded lookup values for `travel_statuses` and `travel_priority_levels`.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table. Rows added at runtime are still valid
//! foreign keys; these enums only name the rows the migrations insert.

use crate::types::LookupId;

macro_rules! define_lookup_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every seeded variant, in id order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the database lookup ID.
            pub fn id(self) -> LookupId {
                self as LookupId
            }

            /// Return the seeded `label` column value.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Find the seeded variant with the given label (case-insensitive).
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(label))
            }
        }

        impl From<$name> for LookupId {
            fn from(value: $name) -> Self {
                value as LookupId
            }
        }
    };
}

define_lookup_enum! {
    /// Lifecycle state shared by trips, destinations, activities and accommodations.
    TravelStatusKind {
        Wishlist = 1 => "wishlist",
        Planned = 2 => "planned",
        Booked = 3 => "booked",
        InProgress = 4 => "in_progress",
        Completed = 5 => "completed",
        Cancelled = 6 => "cancelled",
    }
}

define_lookup_enum! {
    /// Priority ranking shared by trips, destinations, activities and accommodations.
    PriorityLevelKind {
        Low = 1 => "low",
        Medium = 2 => "medium",
        High = 3 => "high",
        MustDo = 4 => "must_do",
    }
}
