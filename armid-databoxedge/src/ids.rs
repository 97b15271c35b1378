//! Resource IDs under `Microsoft.DataBoxEdge`
//!
//! Shapes:
//!
//! ```text
//! .../providers/Microsoft.DataBoxEdge/dataBoxEdgeDevices/{name}
//! .../providers/Microsoft.DataBoxEdge/dataBoxEdgeDevices/{device}/orders/{name}
//! ```

use armid_core::{CaseMode, IdResult, ParsedId, ResourceId, format_id, impl_id_traits};

pub const PROVIDER_NAMESPACE: &str = "Microsoft.DataBoxEdge";

const DEVICES: &str = "dataBoxEdgeDevices";
const ORDERS: &str = "orders";

/// ID of a Databox Edge device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceId {
    pub subscription_id: String,
    pub resource_group: String,
    pub name: String,
}

impl DeviceId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            name: name.into(),
        }
    }

    fn parse_with(id: &str, mode: CaseMode) -> IdResult<Self> {
        let mut parsed = ParsedId::parse(id)?;
        parsed.expect_provider(PROVIDER_NAMESPACE, mode)?;
        let name = parsed.pop_segment_with(DEVICES, mode)?;
        parsed.expect_no_remaining_segments()?;
        Ok(Self {
            subscription_id: parsed.subscription_id,
            resource_group: parsed.resource_group,
            name,
        })
    }
}

impl ResourceId for DeviceId {
    fn parse(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Sensitive)
    }

    fn parse_insensitively(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Insensitive)
    }

    fn id(&self) -> String {
        format_id(
            &self.subscription_id,
            &self.resource_group,
            PROVIDER_NAMESPACE,
            &[(DEVICES, &self.name)],
        )
    }
}

impl_id_traits!(DeviceId);

/// ID of an order placed against a Databox Edge device
///
/// The service materializes at most one order per device, always named
/// `default`; `new` bakes that in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderId {
    pub subscription_id: String,
    pub resource_group: String,
    pub device_name: String,
    pub name: String,
}

impl OrderId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        device_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            device_name: device_name.into(),
            name: "default".to_string(),
        }
    }

    fn parse_with(id: &str, mode: CaseMode) -> IdResult<Self> {
        let mut parsed = ParsedId::parse(id)?;
        parsed.expect_provider(PROVIDER_NAMESPACE, mode)?;
        let device_name = parsed.pop_segment_with(DEVICES, mode)?;
        let name = parsed.pop_segment_with(ORDERS, mode)?;
        parsed.expect_no_remaining_segments()?;
        Ok(Self {
            subscription_id: parsed.subscription_id,
            resource_group: parsed.resource_group,
            device_name,
            name,
        })
    }
}

impl ResourceId for OrderId {
    fn parse(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Sensitive)
    }

    fn parse_insensitively(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Insensitive)
    }

    fn id(&self) -> String {
        format_id(
            &self.subscription_id,
            &self.resource_group,
            PROVIDER_NAMESPACE,
            &[(DEVICES, &self.device_name), (ORDERS, &self.name)],
        )
    }
}

impl_id_traits!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::IdError;

    const SUB: &str = "12345678-1234-5678-1234-123456789012";
    const DEVICE_ID: &str = "/subscriptions/12345678-1234-5678-1234-123456789012/resourceGroups/resourceGroup1/providers/Microsoft.DataBoxEdge/dataBoxEdgeDevices/device1";

    #[test]
    fn device_id_decodes_the_documented_shape() {
        let id = DeviceId::parse(DEVICE_ID).unwrap();
        assert_eq!(id.subscription_id, SUB);
        assert_eq!(id.resource_group, "resourceGroup1");
        assert_eq!(id.name, "device1");
    }

    #[test]
    fn device_id_formats_back_to_the_exact_input() {
        let id = DeviceId::new(SUB, "resourceGroup1", "device1");
        assert_eq!(id.id(), DEVICE_ID);
    }

    #[test]
    fn device_id_round_trips() {
        let id = DeviceId::new(SUB, "MyGroup", "MyDevice");
        let decoded = DeviceId::parse(&id.id()).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn device_id_requires_canonical_segment_casing() {
        let lowercased = DEVICE_ID.replace("dataBoxEdgeDevices", "databoxedgedevices");
        assert!(matches!(
            DeviceId::parse(&lowercased),
            Err(IdError::SegmentNotFound(_))
        ));
        let id = DeviceId::parse_insensitively(&lowercased).unwrap();
        assert_eq!(id.name, "device1");
        // reformat re-emits the canonical casing
        assert_eq!(id.id(), DEVICE_ID);
    }

    #[test]
    fn device_id_rejects_wrong_provider_namespace() {
        let foreign = DEVICE_ID.replace("Microsoft.DataBoxEdge", "Microsoft.Kusto");
        assert!(matches!(
            DeviceId::parse(&foreign),
            Err(IdError::MalformedId(_))
        ));
    }

    #[test]
    fn device_id_rejects_trailing_empty_name() {
        let id = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataBoxEdge/dataBoxEdgeDevices/";
        assert!(DeviceId::parse(id).is_err());
    }

    #[test]
    fn device_id_rejects_extra_segments() {
        let id = format!("{DEVICE_ID}/orders/default");
        assert!(matches!(
            DeviceId::parse(&id),
            Err(IdError::UnexpectedExtraSegments(_))
        ));
    }

    #[test]
    fn order_id_round_trips_with_default_name() {
        let id = OrderId::new(SUB, "resourceGroup1", "device1");
        assert_eq!(id.name, "default");
        assert_eq!(
            id.id(),
            format!("{DEVICE_ID}/orders/default")
        );
        let decoded = OrderId::parse(&id.id()).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn order_id_requires_the_orders_segment() {
        assert!(matches!(
            OrderId::parse(DEVICE_ID),
            Err(IdError::SegmentNotFound(ref key)) if key == "orders"
        ));
    }

    #[test]
    fn device_id_serde_round_trips_as_a_string() {
        let id = DeviceId::new(SUB, "resourceGroup1", "device1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{DEVICE_ID}\""));
        let back: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn device_id_display_and_fromstr_agree() {
        let id: DeviceId = DEVICE_ID.parse().unwrap();
        assert_eq!(id.to_string(), DEVICE_ID);
    }
}
