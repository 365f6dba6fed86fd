//! Delivery product catalog.
//!
//! A closed vocabulary of carrier/service-tier codes accepted by the letters
//! API. The string values are wire-stable; the client attaches no meaning or
//! validation to them beyond membership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A delivery product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryProduct {
    Fast,
    Cheap,
    Bulk,
    Premium,
    Registered,
    AtpostEconomy,
    AtpostPriority,
    PostagA,
    PostagB,
    PostagB2,
    PostagRegistered,
    PostagAplus,
    DpagStandard,
    DpagEconomy,
    IndpostMail,
    IndpostSpeedmail,
    NlpostPriority,
    DhlEuropePriority,
    DhlWorldPriority,
}

impl DeliveryProduct {
    /// Every product code, in wire order.
    pub const ALL: [DeliveryProduct; 19] = [
        DeliveryProduct::Fast,
        DeliveryProduct::Cheap,
        DeliveryProduct::Bulk,
        DeliveryProduct::Premium,
        DeliveryProduct::Registered,
        DeliveryProduct::AtpostEconomy,
        DeliveryProduct::AtpostPriority,
        DeliveryProduct::PostagA,
        DeliveryProduct::PostagB,
        DeliveryProduct::PostagB2,
        DeliveryProduct::PostagRegistered,
        DeliveryProduct::PostagAplus,
        DeliveryProduct::DpagStandard,
        DeliveryProduct::DpagEconomy,
        DeliveryProduct::IndpostMail,
        DeliveryProduct::IndpostSpeedmail,
        DeliveryProduct::NlpostPriority,
        DeliveryProduct::DhlEuropePriority,
        DeliveryProduct::DhlWorldPriority,
    ];

    /// The exact string sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryProduct::Fast => "fast",
            DeliveryProduct::Cheap => "cheap",
            DeliveryProduct::Bulk => "bulk",
            DeliveryProduct::Premium => "premium",
            DeliveryProduct::Registered => "registered",
            DeliveryProduct::AtpostEconomy => "atpost_economy",
            DeliveryProduct::AtpostPriority => "atpost_priority",
            DeliveryProduct::PostagA => "postag_a",
            DeliveryProduct::PostagB => "postag_b",
            DeliveryProduct::PostagB2 => "postag_b2",
            DeliveryProduct::PostagRegistered => "postag_registered",
            DeliveryProduct::PostagAplus => "postag_aplus",
            DeliveryProduct::DpagStandard => "dpag_standard",
            DeliveryProduct::DpagEconomy => "dpag_economy",
            DeliveryProduct::IndpostMail => "indpost_mail",
            DeliveryProduct::IndpostSpeedmail => "indpost_speedmail",
            DeliveryProduct::NlpostPriority => "nlpost_priority",
            DeliveryProduct::DhlEuropePriority => "dhl_europe_priority",
            DeliveryProduct::DhlWorldPriority => "dhl_world_priority",
        }
    }
}

impl fmt::Display for DeliveryProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeliveryProduct {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryProduct::ALL
            .iter()
            .copied()
            .find(|product| product.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown delivery product: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIRE_CODES: [&str; 19] = [
        "fast",
        "cheap",
        "bulk",
        "premium",
        "registered",
        "atpost_economy",
        "atpost_priority",
        "postag_a",
        "postag_b",
        "postag_b2",
        "postag_registered",
        "postag_aplus",
        "dpag_standard",
        "dpag_economy",
        "indpost_mail",
        "indpost_speedmail",
        "nlpost_priority",
        "dhl_europe_priority",
        "dhl_world_priority",
    ];

    #[test]
    fn test_every_wire_code_is_a_member() {
        for code in WIRE_CODES {
            let product = DeliveryProduct::from_str(code).unwrap();
            assert_eq!(product.as_str(), code);
        }
    }

    #[test]
    fn test_all_matches_wire_codes_in_order() {
        let codes: Vec<&str> = DeliveryProduct::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(codes, WIRE_CODES);
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        for code in ["", "fastest", "FAST", "dpag", "postag_c"] {
            assert!(DeliveryProduct::from_str(code).is_err(), "{:?}", code);
        }
    }

    #[test]
    fn test_serializes_as_wire_string() {
        let json = serde_json::to_string(&DeliveryProduct::DhlEuropePriority).unwrap();
        assert_eq!(json, r#""dhl_europe_priority""#);
    }

    #[test]
    fn test_deserializes_from_wire_string() {
        let product: DeliveryProduct = serde_json::from_str(r#""postag_b2""#).unwrap();
        assert_eq!(product, DeliveryProduct::PostagB2);
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let result: Result<DeliveryProduct, _> = serde_json::from_str(r#""express""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(DeliveryProduct::Fast.to_string(), "fast");
        assert_eq!(DeliveryProduct::PostagAplus.to_string(), "postag_aplus");
    }
}
