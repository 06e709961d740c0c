//! Names of the portal resources.

use serde::{Deserialize, Serialize};

/// Every resource the portal dashboards manage.
///
/// The string form is the key of the resource in the configured endpoint
/// table.
///
/// ```
/// use satudata_portal::PortalResource;
/// use std::str::FromStr;
///
/// let resource = PortalResource::from_str("akun_kepala_dinas").unwrap();
/// assert_eq!(resource, PortalResource::AkunKepalaDinas);
/// assert_eq!(resource.to_string(), "akun_kepala_dinas");
/// assert!(PortalResource::from_str("parks").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PortalResource {
    /// Regional government units.
    Opd,
    /// Government affairs classification.
    Urusan,
    /// Digital library books.
    Buku,
    /// Head-of-agency accounts.
    AkunKepalaDinas,
    /// Sectoral statistics transactions.
    TrxSektoral,
    /// Staff users.
    Users,
}

impl PortalResource {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Opd => "Perangkat Daerah",
            Self::Urusan => "Urusan",
            Self::Buku => "Buku Digital",
            Self::AkunKepalaDinas => "Akun Kepala Dinas",
            Self::TrxSektoral => "Data Sektoral",
            Self::Users => "Pengguna",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip() {
        for resource in PortalResource::iter() {
            assert_eq!(
                PortalResource::from_str(resource.as_ref()).unwrap(),
                resource
            );
        }
    }

    #[test]
    fn six_resources() {
        assert_eq!(PortalResource::iter().count(), 6);
    }
}
