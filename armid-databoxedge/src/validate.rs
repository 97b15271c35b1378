//! Static validation tables for Databox Edge resources
//!
//! These mirror the service-side enumerations: membership tests over frozen
//! lists, plus the device naming rule enforced at create time.

/// SKUs a Databox Edge device can be provisioned with
pub const SKU_NAMES: &[&str] = &[
    "EP2_128_GPU1_Mx1_W",
    "EP2_128_1T4_Mx1_W",
    "EP2_64_Mx1_W",
    "EP2_64_1VPU_W",
    "EP2_256_GPU2_Mx1",
    "EP2_256_2T4_W",
    "Edge",
    "EdgeMR_Mini",
    "EdgeMR_TCP",
    "EdgeP_Base",
    "EdgeP_High",
    "EdgePR_Base",
    "EdgePR_Base_UPS",
    "GPU",
    "Gateway",
    "Management",
    "RCA_Large",
    "RCA_Small",
    "RDC",
    "TCA_Large",
    "TCA_Small",
    "TDC",
    "TEA_4Node_Heater",
    "TEA_4Node_UPS_Heater",
    "TEA_1Node",
    "TEA_1Node_Heater",
    "TEA_1Node_UPS",
    "TEA_1Node_UPS_Heater",
    "TMA",
];

/// Countries the service can ship device orders to
pub const SHIPPING_COUNTRIES: &[&str] = &[
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Bulgaria",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Croatia",
    "Cyprus",
    "Czechia",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hong Kong",
    "Hungary",
    "India",
    "Indonesia",
    "Ireland",
    "Italy",
    "Japan",
    "Kenya",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Malaysia",
    "Malta",
    "Mexico",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Romania",
    "Russia",
    "Saudi Arabia",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Taiwan",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Vietnam",
];

pub fn is_valid_sku(name: &str) -> bool {
    SKU_NAMES.contains(&name)
}

pub fn is_valid_shipping_country(name: &str) -> bool {
    SHIPPING_COUNTRIES.contains(&name)
}

/// Validate a device name
///
/// Names are 2 to 24 characters of letters, digits, and hyphens, and must
/// start and end with a letter or digit.
pub fn device_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if !(2..=24).contains(&len) {
        return Err(format!(
            "device name must be between 2 and 24 characters, got {len}"
        ));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("device name may only contain letters, numbers, and hyphens".to_string());
    }
    let starts_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());
    let ends_ok = name.chars().next_back().is_some_and(|c| c.is_ascii_alphanumeric());
    if !starts_ok || !ends_ok {
        return Err("device name must start and end with a letter or number".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_skus_are_accepted() {
        assert!(is_valid_sku("Edge"));
        assert!(is_valid_sku("TEA_1Node_UPS_Heater"));
        assert!(!is_valid_sku("edge"));
        assert!(!is_valid_sku("NotASku"));
    }

    #[test]
    fn shipping_countries_are_exact_match() {
        assert!(is_valid_shipping_country("United States"));
        assert!(is_valid_shipping_country("Japan"));
        assert!(!is_valid_shipping_country("united states"));
        assert!(!is_valid_shipping_country("Atlantis"));
    }

    #[test]
    fn valid_device_names() {
        for name in ["ab", "device1", "my-edge-device", "A1-b2-C3"] {
            assert!(device_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn invalid_device_names() {
        for name in [
            "",
            "a",
            "-leading",
            "trailing-",
            "has spaces",
            "has_underscore",
            "this-name-is-way-too-long-to-be-valid",
        ] {
            assert!(device_name(name).is_err(), "{name:?} should be rejected");
        }
    }
}
