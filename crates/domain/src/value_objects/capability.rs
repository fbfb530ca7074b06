//! Capability units - Special moves, passive effects, and physical modes
//!
//! A capability is a stateless descriptor of one combat behavior: a name, an
//! eligibility predicate, and an effect. The battle engine decides when to
//! evaluate the predicate and when to apply the effect; this module only
//! guarantees that both are always callable. Capabilities carry no state and
//! no back-reference, so one instance can be shared across many Beys.
//!
//! The three kinds are one polymorphic shape discriminated by [`CapabilityKind`];
//! attach operations on the entity compare kind tags rather than relying on
//! runtime type identity.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Discriminating tag for a capability unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// An actively invoked special move
    Special,
    /// A passive stat boost or reactive attack
    Passive,
    /// A physical mode the Bey can be switched into
    Mode,
}

impl CapabilityKind {
    /// Get all capability kinds
    pub fn all() -> &'static [CapabilityKind] {
        &[
            CapabilityKind::Special,
            CapabilityKind::Passive,
            CapabilityKind::Mode,
        ]
    }

    /// The name a capability of this kind gets when none is supplied
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            CapabilityKind::Special => "Special",
            CapabilityKind::Passive => "Passive",
            CapabilityKind::Mode => "Mode",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placeholder_name())
    }
}

/// Eligibility predicate for a capability.
///
/// The engine supplies whatever context it defines; the predicate downcasts
/// what it needs. Defaults to "not applicable" (always false).
pub type RequirementFn = Arc<dyn Fn(&dyn Any) -> bool + Send + Sync>;

/// Effect function for a capability.
///
/// The engine supplies a mutable context of its own definition. Defaults to a
/// no-op.
pub type EffectFn = Arc<dyn Fn(&mut dyn Any) + Send + Sync>;

fn default_requirement() -> RequirementFn {
    Arc::new(|_| false)
}

fn default_effect() -> EffectFn {
    Arc::new(|_| {})
}

/// A named, stateless descriptor of one combat behavior
///
/// Immutable after construction. Use the builder-style `with_*` methods to
/// customize a freshly constructed unit.
#[derive(Clone)]
pub struct Capability {
    kind: CapabilityKind,
    name: String,
    requirement: RequirementFn,
    effect: EffectFn,
}

impl Capability {
    fn new(kind: CapabilityKind) -> Self {
        Self {
            kind,
            name: kind.placeholder_name().to_string(),
            requirement: default_requirement(),
            effect: default_effect(),
        }
    }

    /// Create a special move with placeholder name and harmless defaults
    pub fn special() -> Self {
        Self::new(CapabilityKind::Special)
    }

    /// Create a passive effect with placeholder name and harmless defaults
    pub fn passive() -> Self {
        Self::new(CapabilityKind::Passive)
    }

    /// Create a physical mode with placeholder name and harmless defaults
    pub fn mode() -> Self {
        Self::new(CapabilityKind::Mode)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the default always-false eligibility predicate
    pub fn with_requirement(
        mut self,
        requirement: impl Fn(&dyn Any) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.requirement = Arc::new(requirement);
        self
    }

    /// Replace the default no-op effect
    pub fn with_effect(mut self, effect: impl Fn(&mut dyn Any) + Send + Sync + 'static) -> Self {
        self.effect = Arc::new(effect);
        self
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    /// The discriminating kind tag, set at construction
    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether this capability carries the given kind tag
    pub fn is(&self, kind: CapabilityKind) -> bool {
        self.kind == kind
    }

    /// The eligibility predicate (always callable)
    pub fn requirement(&self) -> &RequirementFn {
        &self.requirement
    }

    /// The effect function (always callable)
    pub fn effect(&self) -> &EffectFn {
        &self.effect
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Engine-facing invocation helpers
    // ──────────────────────────────────────────────────────────────────────────

    /// Evaluate the eligibility predicate against an engine-defined context
    pub fn evaluate(&self, context: &dyn Any) -> bool {
        (self.requirement)(context)
    }

    /// Apply the effect to an engine-defined context
    pub fn apply(&self, context: &mut dyn Any) {
        (self.effect)(context)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_names_are_kind_specific() {
        assert_eq!(Capability::special().name(), "Special");
        assert_eq!(Capability::passive().name(), "Passive");
        assert_eq!(Capability::mode().name(), "Mode");
    }

    #[test]
    fn default_requirement_reports_not_applicable() {
        let special = Capability::special();
        assert!(!special.evaluate(&()));
        assert!(!special.evaluate(&42i32));
        assert!(!special.evaluate(&"launch".to_string()));
    }

    #[test]
    fn default_effect_performs_no_observable_mutation() {
        let mode = Capability::mode();
        let mut hits = 7u32;
        mode.apply(&mut hits);
        assert_eq!(hits, 7);
    }

    #[test]
    fn custom_behavior_functions_receive_engine_context() {
        let special = Capability::special()
            .with_name("Burst")
            .with_requirement(|ctx| ctx.downcast_ref::<u32>().is_some_and(|hits| *hits >= 3))
            .with_effect(|ctx| {
                if let Some(hits) = ctx.downcast_mut::<u32>() {
                    *hits = 0;
                }
            });

        assert_eq!(special.name(), "Burst");
        assert!(!special.evaluate(&2u32));
        assert!(special.evaluate(&3u32));

        let mut hits = 5u32;
        special.apply(&mut hits);
        assert_eq!(hits, 0);
    }

    #[test]
    fn kind_tag_is_set_at_construction() {
        assert!(Capability::special().is(CapabilityKind::Special));
        assert!(!Capability::passive().is(CapabilityKind::Mode));
        assert_eq!(Capability::mode().kind(), CapabilityKind::Mode);
    }

    #[test]
    fn shared_capability_is_reusable_across_clones() {
        let passive = Capability::passive()
            .with_name("Life After Death")
            .with_requirement(|_| true);
        let copy = passive.clone();
        assert!(passive.evaluate(&()));
        assert!(copy.evaluate(&()));
        assert_eq!(copy.name(), "Life After Death");
    }

    #[test]
    fn kind_display_matches_placeholder() {
        assert_eq!(CapabilityKind::Special.to_string(), "Special");
        assert_eq!(CapabilityKind::all().len(), 3);
    }
}
