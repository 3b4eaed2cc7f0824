//! Table metadata and the categorical value types stored in them.
//!
//! Every persisted row type implements [`Entity`], which names its table and the
//! tables it references. The persistence writer derives its insert order from
//! that metadata.

use diesel::expression::AsExpression;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A persisted row type.
pub trait Entity {
    /// SQL table name
    const NAME: &'static str;

    /// Tables referenced through foreign keys
    const DEPENDS_ON: &'static [&'static str];
}

/// Error returned when a stored label does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.label)
    }
}

impl std::error::Error for UnknownLabel {}

/// Declares a text-backed enum: label table, `Display`, `FromStr` and the
/// diesel `ToSql<Text, Sqlite>` binding.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, Serialize, Deserialize)]
        #[diesel(sql_type = Text)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownLabel {
                        kind: $kind,
                        label: other.to_string(),
                    }),
                }
            }
        }

        impl ToSql<Text, Sqlite> for $name {
            fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
                out.set_value(self.as_str());
                Ok(IsNull::No)
            }
        }
    };
}

text_enum! {
    /// Nominal customer attribute.
    Gender, "gender" {
        Male => "Male",
        Female => "Female",
        NonBinary => "Non-binary",
        PreferNotToSay => "Prefer not to say",
    }
}

text_enum! {
    /// Loyalty tier. Variants are declared in rank order, so the derived
    /// ordering is `Bronze < Silver < Gold < Platinum`.
    #[derive(PartialOrd, Ord)]
    Tier, "tier" {
        Bronze => "Bronze",
        Silver => "Silver",
        Gold => "Gold",
        Platinum => "Platinum",
    }
}

text_enum! {
    Carrier, "carrier" {
        Dhl => "DHL",
        FedEx => "FedEx",
        Ups => "UPS",
        Local => "Local",
    }
}

impl Tier {
    /// Sampling weights, aligned with [`Tier::ALL`].
    pub const WEIGHTS: [f64; 4] = [0.5, 0.3, 0.15, 0.05];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_is_ordinal() {
        assert!(Tier::Bronze < Tier::Silver);
        assert!(Tier::Silver < Tier::Gold);
        assert!(Tier::Gold < Tier::Platinum);

        let mut tiers = vec![Tier::Platinum, Tier::Bronze, Tier::Gold, Tier::Silver];
        tiers.sort();
        assert_eq!(tiers, Tier::ALL.to_vec());
    }

    #[test]
    fn test_labels_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(gender.as_str().parse::<Gender>(), Ok(*gender));
        }
        assert_eq!("Non-binary".parse::<Gender>(), Ok(Gender::NonBinary));
        assert_eq!(Carrier::Ups.to_string(), "UPS");
    }

    #[test]
    fn test_unknown_label() {
        let err = "Diamond".parse::<Tier>().unwrap_err();
        assert_eq!(err.kind, "tier");
        assert_eq!(err.to_string(), "Unknown tier 'Diamond'");
    }
}
