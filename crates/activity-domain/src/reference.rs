//! Static reference tables consumed by validation and rendering.

use crate::choices::{ActivityType, Category, Choice, LocationType};

/// Dialing code preselected for new location drafts.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// One entry of the dialing-code picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub label: &'static str,
    pub short: &'static str,
}

impl CountryCode {
    const fn new(code: &'static str, label: &'static str, short: &'static str) -> Self {
        Self { code, label, short }
    }

    /// Picker label, e.g. `IN India (+91)`.
    pub fn display_label(&self) -> String {
        format!("{} {} ({})", self.short, self.label, self.code)
    }
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode::new("+91", "India", "IN"),
    CountryCode::new("+1", "United States", "US"),
    CountryCode::new("+44", "United Kingdom", "UK"),
    CountryCode::new("+61", "Australia", "AU"),
    CountryCode::new("+49", "Germany", "DE"),
    CountryCode::new("+33", "France", "FR"),
    CountryCode::new("+81", "Japan", "JP"),
    CountryCode::new("+86", "China", "CN"),
    CountryCode::new("+55", "Brazil", "BR"),
    CountryCode::new("+52", "Mexico", "MX"),
    CountryCode::new("+971", "UAE", "AE"),
    CountryCode::new("+65", "Singapore", "SG"),
    CountryCode::new("+966", "Saudi Arabia", "SA"),
    CountryCode::new("+82", "South Korea", "KR"),
    CountryCode::new("+39", "Italy", "IT"),
];

/// States and union territories offered by the location step.
pub const SUBDIVISIONS: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Immutable bundle of every option list the wizard presents.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceData {
    pub categories: &'static [Category],
    pub activity_types: &'static [ActivityType],
    pub location_types: &'static [LocationType],
    pub subdivisions: &'static [&'static str],
    pub country_codes: &'static [CountryCode],
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReferenceData {
    pub const fn standard() -> Self {
        Self {
            categories: Category::ALL,
            activity_types: ActivityType::ALL,
            location_types: LocationType::ALL,
            subdivisions: SUBDIVISIONS,
            country_codes: COUNTRY_CODES,
        }
    }

    /// Canonical spelling of a listed subdivision.
    pub fn subdivision(&self, name: &str) -> Option<&'static str> {
        let needle = name.trim();
        self.subdivisions
            .iter()
            .copied()
            .find(|candidate| candidate.eq_ignore_ascii_case(needle))
    }

    /// Finds a dialing code by code (`+91` or `91`), short id (`IN`) or country name.
    pub fn country(&self, query: &str) -> Option<&'static CountryCode> {
        let needle = query.trim();
        if needle.is_empty() {
            return None;
        }
        let with_plus = if needle.starts_with('+') {
            needle.to_string()
        } else {
            format!("+{needle}")
        };
        self.country_codes.iter().find(|entry| {
            entry.code == with_plus
                || entry.short.eq_ignore_ascii_case(needle)
                || entry.label.eq_ignore_ascii_case(needle)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_country_code_is_listed() {
        let reference = ReferenceData::standard();
        let entry = reference.country(DEFAULT_COUNTRY_CODE).expect("default listed");
        assert_eq!(entry.label, "India");
    }

    #[test]
    fn country_lookup_accepts_code_short_and_name() {
        let reference = ReferenceData::standard();
        assert_eq!(reference.country("44").map(|c| c.short), Some("UK"));
        assert_eq!(reference.country("jp").map(|c| c.code), Some("+81"));
        assert_eq!(reference.country("saudi arabia").map(|c| c.code), Some("+966"));
        assert!(reference.country("+999").is_none());
        assert!(reference.country("  ").is_none());
    }

    #[test]
    fn subdivision_lookup_returns_canonical_spelling() {
        let reference = ReferenceData::standard();
        assert_eq!(reference.subdivision("tamil nadu"), Some("Tamil Nadu"));
        assert_eq!(reference.subdivision("Atlantis"), None);
        assert_eq!(reference.subdivisions.len(), 36);
    }
}
