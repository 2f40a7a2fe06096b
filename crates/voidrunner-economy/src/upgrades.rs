use serde::{Deserialize, Serialize};
use thiserror::Error;

use voidrunner_core::constants::{
    CHAIN_BASE_WINDOW, CHAIN_WINDOW_PER_LEVEL, SHIELD_BASE_COOLDOWN, SHIELD_COOLDOWN_PER_LEVEL,
};
use voidrunner_core::enums::UpgradeKind;

/// Max upgrade level for any category.
pub const MAX_UPGRADE_LEVEL: u32 = 3;

/// Per-level top speed bonus (+8% per level).
pub const SPEED_UPGRADE_MULT: f64 = 0.08;

/// Cost for a given upgrade category at a given current level.
/// Returns None if already at max level.
pub fn upgrade_cost(kind: UpgradeKind, current_level: u32) -> Option<u64> {
    if current_level >= MAX_UPGRADE_LEVEL {
        return None;
    }
    let table = match kind {
        UpgradeKind::Speed => [150, 300, 500],
        UpgradeKind::Shield => [200, 400, 650],
        UpgradeKind::Chain => [120, 260, 420],
    };
    Some(table[current_level as usize])
}

/// Why a purchase was refused. Refusals leave levels and score untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("{0:?} already at max level")]
    MaxLevel(UpgradeKind),
    #[error("insufficient score: have {have}, need {need}")]
    InsufficientScore { have: u64, need: u64 },
}

/// Purchased levels per category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub speed: u32,
    pub shield: u32,
    pub chain: u32,
}

impl UpgradeLevels {
    pub fn level_for(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Speed => self.speed,
            UpgradeKind::Shield => self.shield,
            UpgradeKind::Chain => self.chain,
        }
    }

    fn set_level(&mut self, kind: UpgradeKind, level: u32) {
        match kind {
            UpgradeKind::Speed => self.speed = level,
            UpgradeKind::Shield => self.shield = level,
            UpgradeKind::Chain => self.chain = level,
        }
    }

    /// Cost of the next level, if any remain.
    pub fn next_cost(&self, kind: UpgradeKind) -> Option<u64> {
        upgrade_cost(kind, self.level_for(kind))
    }

    /// Stats that depend on the purchased levels.
    pub fn derived(&self) -> DerivedStats {
        DerivedStats {
            speed_multiplier: 1.0 + self.speed as f64 * SPEED_UPGRADE_MULT,
            shield_cooldown: SHIELD_BASE_COOLDOWN - self.shield as f64 * SHIELD_COOLDOWN_PER_LEVEL,
            chain_window: CHAIN_BASE_WINDOW + self.chain as f64 * CHAIN_WINDOW_PER_LEVEL,
        }
    }
}

/// Player stats recomputed from upgrade levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    /// Multiplier on the player's base top speed.
    pub speed_multiplier: f64,
    /// Shield burst cooldown (seconds).
    pub shield_cooldown: f64,
    /// Chain decay window (seconds).
    pub chain_window: f64,
}

/// Buy one level of `kind` with `score` available. Returns the cost paid;
/// the caller deducts it.
pub fn try_purchase(
    levels: &mut UpgradeLevels,
    kind: UpgradeKind,
    score: u64,
) -> Result<u64, PurchaseError> {
    let current = levels.level_for(kind);
    let cost = upgrade_cost(kind, current).ok_or(PurchaseError::MaxLevel(kind))?;
    if score < cost {
        return Err(PurchaseError::InsufficientScore {
            have: score,
            need: cost,
        });
    }
    levels.set_level(kind, current + 1);
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [UpgradeKind; 3] = [UpgradeKind::Speed, UpgradeKind::Shield, UpgradeKind::Chain];

    #[test]
    fn costs_increase_with_level() {
        for kind in ALL {
            let mut prev = 0;
            for level in 0..MAX_UPGRADE_LEVEL {
                let cost = upgrade_cost(kind, level).unwrap();
                assert!(cost > prev, "{kind:?} level {level}");
                prev = cost;
            }
            assert_eq!(upgrade_cost(kind, MAX_UPGRADE_LEVEL), None);
        }
    }

    #[test]
    fn purchase_at_exact_cost_succeeds() {
        let mut levels = UpgradeLevels::default();
        let cost = upgrade_cost(UpgradeKind::Shield, 0).unwrap();
        assert_eq!(try_purchase(&mut levels, UpgradeKind::Shield, cost), Ok(cost));
        assert_eq!(levels.shield, 1);
    }

    #[test]
    fn insufficient_score_changes_nothing() {
        let mut levels = UpgradeLevels::default();
        let err = try_purchase(&mut levels, UpgradeKind::Speed, 149).unwrap_err();
        assert_eq!(err, PurchaseError::InsufficientScore { have: 149, need: 150 });
        assert_eq!(levels, UpgradeLevels::default());
    }

    #[test]
    fn max_level_is_rejected() {
        let mut levels = UpgradeLevels::default();
        for _ in 0..MAX_UPGRADE_LEVEL {
            try_purchase(&mut levels, UpgradeKind::Chain, u64::MAX).unwrap();
        }
        assert_eq!(
            try_purchase(&mut levels, UpgradeKind::Chain, u64::MAX),
            Err(PurchaseError::MaxLevel(UpgradeKind::Chain))
        );
        assert_eq!(levels.chain, MAX_UPGRADE_LEVEL);
        assert_eq!(levels.next_cost(UpgradeKind::Chain), None);
    }

    #[test]
    fn derived_stats_track_levels() {
        let base = UpgradeLevels::default().derived();
        assert_eq!(base.speed_multiplier, 1.0);
        assert_eq!(base.shield_cooldown, SHIELD_BASE_COOLDOWN);
        assert_eq!(base.chain_window, CHAIN_BASE_WINDOW);

        let maxed = UpgradeLevels {
            speed: 3,
            shield: 3,
            chain: 3,
        }
        .derived();
        assert!(maxed.speed_multiplier > base.speed_multiplier);
        assert!(maxed.shield_cooldown < base.shield_cooldown);
        assert!(maxed.shield_cooldown > 0.0);
        assert!(maxed.chain_window > base.chain_window);
    }
}
