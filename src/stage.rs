//! Growth stages.
//!
//! Maps session progress onto the four stages of the tree. The mapping is a
//! pure function; drawing a stage is left to `ui::tree`.

/// Stage of the tree, ordered from least to most grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrowthStage {
    Seed,
    Sprout,
    Sapling,
    Tree,
}

impl GrowthStage {
    /// All stages in growth order.
    pub const ALL: [GrowthStage; 4] = [
        GrowthStage::Seed,
        GrowthStage::Sprout,
        GrowthStage::Sapling,
        GrowthStage::Tree,
    ];

    /// Human readable name of the stage.
    pub fn label(self) -> &'static str {
        match self {
            GrowthStage::Seed => "Seed",
            GrowthStage::Sprout => "Sprout",
            GrowthStage::Sapling => "Sapling",
            GrowthStage::Tree => "Tree",
        }
    }

    /// Progress percentage at which this stage begins.
    pub fn threshold(self) -> f64 {
        match self {
            GrowthStage::Seed => 0.0,
            GrowthStage::Sprout => 25.0,
            GrowthStage::Sapling => 50.0,
            GrowthStage::Tree => 75.0,
        }
    }
}

/// Returns the stage for a progress percentage.
///
/// Intervals are half-open, so 25, 50 and 75 belong to the higher stage.
/// Input outside `[0, 100]` is clamped and NaN counts as no progress.
pub fn stage_for(progress: f64) -> GrowthStage {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    };

    if progress < GrowthStage::Sprout.threshold() {
        GrowthStage::Seed
    } else if progress < GrowthStage::Sapling.threshold() {
        GrowthStage::Sprout
    } else if progress < GrowthStage::Tree.threshold() {
        GrowthStage::Sapling
    } else {
        GrowthStage::Tree
    }
}
