//! Upgrade shop for the Voidrunner simulation.
//!
//! Purchases are paid from the session score. Levels persist for the
//! session and reset on restart; derived stats are recomputed from the
//! levels after every accepted purchase.

pub mod upgrades;

pub use upgrades::{
    try_purchase, upgrade_cost, DerivedStats, PurchaseError, UpgradeLevels, MAX_UPGRADE_LEVEL,
};
