//! Domain Events
//!
//! Coarse-grained events representing state changes on a Bey. The entity
//! publishes them through an injected [`EventSink`]; delivery, fan-out, and
//! subscription are the observer system's concern, not this crate's.

use serde::{Deserialize, Serialize};

use crate::ids::BeybladeId;
use crate::types::SpinDirection;
use crate::value_objects::CapabilityKind;

/// Domain event for a state change on a Bey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BeybladeEvent {
    CapabilityAttached {
        bey_id: BeybladeId,
        kind: CapabilityKind,
        name: String,
    },
    SpinPolicyChanged {
        bey_id: BeybladeId,
        changeable: bool,
        default_spin: SpinDirection,
    },
    PropertyAdded {
        bey_id: BeybladeId,
        name: String,
    },
}

impl BeybladeEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CapabilityAttached { .. } => "capability_attached",
            Self::SpinPolicyChanged { .. } => "spin_policy_changed",
            Self::PropertyAdded { .. } => "property_added",
        }
    }

    pub fn bey_id(&self) -> BeybladeId {
        match self {
            Self::CapabilityAttached { bey_id, .. } => *bey_id,
            Self::SpinPolicyChanged { bey_id, .. } => *bey_id,
            Self::PropertyAdded { bey_id, .. } => *bey_id,
        }
    }
}

/// Port for publishing Bey events to an external observer system
///
/// Publishing is best-effort and synchronous; implementations must not block.
/// A Bey without a sink simply publishes nothing.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: BeybladeEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names_are_stable() {
        let id = BeybladeId::new();
        let event = BeybladeEvent::CapabilityAttached {
            bey_id: id,
            kind: CapabilityKind::Special,
            name: "Burst".to_string(),
        };
        assert_eq!(event.event_type(), "capability_attached");
        assert_eq!(event.bey_id(), id);
    }

    #[test]
    fn events_serialize_with_camel_case_fields() {
        let event = BeybladeEvent::SpinPolicyChanged {
            bey_id: BeybladeId::new(),
            changeable: true,
            default_spin: SpinDirection::Left,
        };
        let encoded = serde_json::to_value(&event).expect("serialize");
        assert_eq!(encoded["spinPolicyChanged"]["defaultSpin"], "left");
        assert_eq!(encoded["spinPolicyChanged"]["changeable"], true);
    }
}
