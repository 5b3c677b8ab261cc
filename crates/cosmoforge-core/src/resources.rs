use serde::{Deserialize, Serialize};

/// An amount of the four account resources. Metal, crystal, and deuterium
/// are the mined currencies; energy is the derived fourth component that a
/// handful of catalog entries price in (it never participates in build-time
/// arithmetic).
///
/// All components are unsigned and all arithmetic saturates, so no operation
/// can produce a negative or wrapped amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub metal: u64,
    pub crystal: u64,
    pub deuterium: u64,
    pub energy: u64,
}

impl Resources {
    /// The zero amount.
    pub const ZERO: Resources = Resources::new(0, 0, 0);

    /// Amount with the three mined components; energy zero.
    pub const fn new(metal: u64, crystal: u64, deuterium: u64) -> Self {
        Self {
            metal,
            crystal,
            deuterium,
            energy: 0,
        }
    }

    /// Same amount with the energy component replaced.
    pub const fn with_energy(self, energy: u64) -> Self {
        Self { energy, ..self }
    }

    /// Component-wise saturating addition.
    #[must_use = "returns the sum without modifying the operands"]
    pub fn saturating_add(self, other: Resources) -> Resources {
        Resources {
            metal: self.metal.saturating_add(other.metal),
            crystal: self.crystal.saturating_add(other.crystal),
            deuterium: self.deuterium.saturating_add(other.deuterium),
            energy: self.energy.saturating_add(other.energy),
        }
    }

    /// Component-wise saturating subtraction. Components floor at zero
    /// rather than going negative.
    #[must_use = "returns the difference without modifying the operands"]
    pub fn saturating_sub(self, other: Resources) -> Resources {
        Resources {
            metal: self.metal.saturating_sub(other.metal),
            crystal: self.crystal.saturating_sub(other.crystal),
            deuterium: self.deuterium.saturating_sub(other.deuterium),
            energy: self.energy.saturating_sub(other.energy),
        }
    }

    /// Every component multiplied by `n`, saturating. Used to price a batch
    /// of `n` identical units.
    #[must_use = "returns the scaled amount without modifying the operand"]
    pub fn scaled(self, n: u64) -> Resources {
        Resources {
            metal: self.metal.saturating_mul(n),
            crystal: self.crystal.saturating_mul(n),
            deuterium: self.deuterium.saturating_mul(n),
            energy: self.energy.saturating_mul(n),
        }
    }

    /// Sum of the three mined components. Energy is excluded because it is
    /// not a stockpiled currency.
    pub fn total(&self) -> u64 {
        self.metal
            .saturating_add(self.crystal)
            .saturating_add(self.deuterium)
    }

    /// Whether `self` is component-wise at least `cost` (i.e. the cost is
    /// affordable from this stockpile).
    pub fn covers(&self, cost: &Resources) -> bool {
        self.metal >= cost.metal
            && self.crystal >= cost.crystal
            && self.deuterium >= cost.deuterium
            && self.energy >= cost.energy
    }

    /// Whether all components are zero.
    pub fn is_zero(&self) -> bool {
        *self == Resources::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_energy_zero() {
        let r = Resources::new(60, 15, 0);
        assert_eq!(r.metal, 60);
        assert_eq!(r.crystal, 15);
        assert_eq!(r.deuterium, 0);
        assert_eq!(r.energy, 0);
    }

    #[test]
    fn with_energy_replaces_only_energy() {
        let r = Resources::new(0, 2000, 500).with_energy(1000);
        assert_eq!(r.crystal, 2000);
        assert_eq!(r.energy, 1000);
    }

    #[test]
    fn add_is_component_wise() {
        let a = Resources::new(100, 200, 300);
        let b = Resources::new(1, 2, 3);
        let sum = a.saturating_add(b);
        assert_eq!(sum, Resources::new(101, 202, 303));
    }

    #[test]
    fn add_saturates_at_max() {
        let a = Resources::new(u64::MAX, 0, 0);
        let b = Resources::new(1, 0, 0);
        assert_eq!(a.saturating_add(b).metal, u64::MAX);
    }

    #[test]
    fn sub_floors_at_zero() {
        let a = Resources::new(10, 10, 10);
        let b = Resources::new(20, 5, 10);
        let diff = a.saturating_sub(b);
        assert_eq!(diff, Resources::new(0, 5, 0));
    }

    #[test]
    fn scaled_multiplies_every_component() {
        let unit = Resources::new(2000, 2000, 0);
        let fleet = unit.scaled(25);
        assert_eq!(fleet, Resources::new(50_000, 50_000, 0));
    }

    #[test]
    fn scaled_saturates() {
        let r = Resources::new(u64::MAX / 2 + 1, 0, 0);
        assert_eq!(r.scaled(2).metal, u64::MAX);
    }

    #[test]
    fn total_excludes_energy() {
        let r = Resources::new(100, 200, 300).with_energy(5000);
        assert_eq!(r.total(), 600);
    }

    #[test]
    fn covers_requires_every_component() {
        let stock = Resources::new(1000, 1000, 0);
        assert!(stock.covers(&Resources::new(1000, 999, 0)));
        assert!(!stock.covers(&Resources::new(1000, 1001, 0)));
        assert!(!stock.covers(&Resources::new(0, 0, 1)));
        assert!(!stock.covers(&Resources::ZERO.with_energy(1)));
    }

    #[test]
    fn zero_is_zero() {
        assert!(Resources::ZERO.is_zero());
        assert!(!Resources::new(0, 0, 1).is_zero());
        assert!(!Resources::ZERO.with_energy(1).is_zero());
    }

    #[test]
    fn serde_defaults_missing_components_to_zero() {
        let r: Resources = serde_json::from_str(r#"{"metal": 60, "crystal": 15}"#).unwrap();
        assert_eq!(r, Resources::new(60, 15, 0));
    }
}
