//! Macro for implementing Display and FromStr for wire enums
//!
//! The remote service spells enum values in upper snake case
//! (`CANCELLATION_REQUESTED`). The macro maps every variant to its wire
//! spelling for `Display` and parses case-insensitively for `FromStr`, so the
//! same value can be used as a query parameter and read back from user input.
//!
//! # Example
//!
//! ```rust
//! use carcatalogue_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum CarState {
//!     Available,
//!     Rented,
//! }
//!
//! impl_wire_enum_conversions!(CarState {
//!     Available => "AVAILABLE",
//!     Rented => "RENTED",
//! });
//!
//! assert_eq!(CarState::Rented.to_string(), "RENTED");
//! assert_eq!("available".parse::<CarState>(), Ok(CarState::Available));
//! ```

/// Implements Display and FromStr traits for wire enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their upper-case wire
///   representations
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
