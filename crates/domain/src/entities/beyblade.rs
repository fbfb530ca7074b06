//! Beyblade entity - the composed game object the battle engine consumes
//!
//! A Bey accumulates capability units (specials, passives, modes) plus scalar
//! configuration through validated, chainable mutations. It performs no combat
//! logic itself: the battle engine iterates the collections and decides when to
//! evaluate and apply each capability's behavior functions.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::events::{BeybladeEvent, EventSink};
use crate::value_objects::{Capability, CapabilityKind, Property};
use beybldr_domain::{BeyType, BeybladeId, SpinDirection};

/// Avatar used when a Bey is created without an image link
pub const DEFAULT_IMAGE_LINK: &str = "https://images-ext-1.discordapp.net/external/SkyihHxg4MHJ_qWWMLPFNPYVV-Z1XnxCfqd0EQrXYXA/%3Fsize%3D128/https/cdn.discordapp.com/avatars/570115430786531340/e3ff8924f1d5d41c975907008f0059f2.png?width=100&height=100";

/// Construction-time configuration for a Bey
///
/// Every field defaults independently, so a partial configuration merges with
/// the defaults. Unrecognized keys in serialized input are ignored rather than
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeybladeConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub bey_type: BeyType,
    pub image_link: String,
    pub aliases: Vec<String>,
}

impl Default for BeybladeConfig {
    fn default() -> Self {
        Self {
            name: "Beyblade".to_string(),
            bey_type: BeyType::default(),
            image_link: DEFAULT_IMAGE_LINK.to_string(),
            aliases: Vec::new(),
        }
    }
}

/// The composed game entity
///
/// Always mutable; there is no sealed or finalized state. Collections are
/// append-only and preserve insertion order.
pub struct Beyblade {
    id: BeybladeId,
    name: String,
    bey_type: BeyType,
    image_link: String,
    aliases: Vec<String>,
    specials: Vec<Capability>,
    passives: Vec<Capability>,
    modes: Vec<Capability>,
    vars: Vec<Property>,
    spin_changeable: bool,
    default_spin: SpinDirection,
    event_sink: Option<Arc<dyn EventSink>>,
}

impl Beyblade {
    pub fn new(config: BeybladeConfig) -> Self {
        Self {
            id: BeybladeId::new(),
            name: config.name,
            bey_type: config.bey_type,
            image_link: config.image_link,
            aliases: config.aliases,
            specials: Vec::new(),
            passives: Vec::new(),
            modes: Vec::new(),
            vars: Vec::new(),
            spin_changeable: false,
            default_spin: SpinDirection::default(),
            event_sink: None,
        }
    }

    /// Install an observer for this Bey's mutation events
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = Some(sink);
        self
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors (the battle engine's view)
    // ──────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> BeybladeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bey_type(&self) -> BeyType {
        self.bey_type
    }

    pub fn image_link(&self) -> &str {
        &self.image_link
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn specials(&self) -> &[Capability] {
        &self.specials
    }

    pub fn passives(&self) -> &[Capability] {
        &self.passives
    }

    pub fn modes(&self) -> &[Capability] {
        &self.modes
    }

    pub fn vars(&self) -> &[Property] {
        &self.vars
    }

    /// Whether the player may change the spin direction
    pub fn spin_changeable(&self) -> bool {
        self.spin_changeable
    }

    /// Default spin direction when the player hasn't changed it
    pub fn default_spin(&self) -> SpinDirection {
        self.default_spin
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Mutating operations (chainable)
    // ──────────────────────────────────────────────────────────────────────────

    /// Attach a special move to the Bey
    ///
    /// Fails with [`DomainError::TypeMismatch`] if the capability carries a
    /// different kind tag; the collection is left untouched on failure.
    pub fn attach_special(&mut self, special: Capability) -> Result<&mut Self, DomainError> {
        self.attach(CapabilityKind::Special, special)
    }

    /// Attach a passive effect to the Bey
    pub fn attach_passive(&mut self, passive: Capability) -> Result<&mut Self, DomainError> {
        self.attach(CapabilityKind::Passive, passive)
    }

    /// Attach a physical mode to the Bey
    pub fn attach_mode(&mut self, mode: Capability) -> Result<&mut Self, DomainError> {
        self.attach(CapabilityKind::Mode, mode)
    }

    fn attach(
        &mut self,
        expected: CapabilityKind,
        capability: Capability,
    ) -> Result<&mut Self, DomainError> {
        if !capability.is(expected) {
            tracing::warn!(
                bey = %self.name,
                expected = %expected,
                actual = %capability.kind(),
                "rejected capability attach"
            );
            return Err(DomainError::type_mismatch(expected, capability.kind()));
        }
        tracing::debug!(bey = %self.name, kind = %expected, capability = capability.name(), "capability attached");
        self.publish(BeybladeEvent::CapabilityAttached {
            bey_id: self.id,
            kind: expected,
            name: capability.name().to_string(),
        });
        match expected {
            CapabilityKind::Special => self.specials.push(capability),
            CapabilityKind::Passive => self.passives.push(capability),
            CapabilityKind::Mode => self.modes.push(capability),
        }
        Ok(self)
    }

    /// Set whether the player may change the spin direction
    pub fn set_spin_changeable(&mut self, changeable: bool) -> &mut Self {
        self.spin_changeable = changeable;
        self.publish_spin_policy();
        self
    }

    /// Set the default spin direction the Bey starts in
    pub fn set_default_spin(&mut self, direction: SpinDirection) -> &mut Self {
        self.default_spin = direction;
        self.publish_spin_policy();
        self
    }

    /// Add a free-form named property
    ///
    /// Purely additive: entries keep insertion order and several entries may
    /// share the same name.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let property = Property::new(name, value);
        tracing::debug!(bey = %self.name, property = property.name(), "property added");
        self.publish(BeybladeEvent::PropertyAdded {
            bey_id: self.id,
            name: property.name().to_string(),
        });
        self.vars.push(property);
        self
    }

    fn publish_spin_policy(&self) {
        self.publish(BeybladeEvent::SpinPolicyChanged {
            bey_id: self.id,
            changeable: self.spin_changeable,
            default_spin: self.default_spin,
        });
    }

    fn publish(&self, event: BeybladeEvent) {
        if let Some(sink) = &self.event_sink {
            sink.publish(event);
        }
    }
}

impl Default for Beyblade {
    fn default() -> Self {
        Self::new(BeybladeConfig::default())
    }
}

impl fmt::Debug for Beyblade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Beyblade")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("bey_type", &self.bey_type)
            .field("aliases", &self.aliases)
            .field("specials", &self.specials)
            .field("passives", &self.passives)
            .field("modes", &self.modes)
            .field("vars", &self.vars)
            .field("spin_changeable", &self.spin_changeable)
            .field("default_spin", &self.default_spin)
            .finish_non_exhaustive()
    }
}
