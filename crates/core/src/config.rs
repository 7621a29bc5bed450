//! Rules configuration
//!
//! Every tunable number of the simulation lives here. Defaults come from the
//! constants in `blockfall-types`.

use crate::types::{
    COMBO_CAP, COMBO_INCREMENTS, COMBO_START, FALL_INTERVAL_MS, HORIZONTAL_REPEAT_MS,
    INITIAL_PLACEMENT_SCORE, LINE_SCORES, PLACEMENT_DECAY_STEP, REPEAT_DELAY_MS,
    SCORE_DECAY_PERIOD_MS, SOFT_DROP_REPEAT_MS, SPAWN_X, SPAWN_Y,
};

/// Line clear scoring tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTable {
    /// Points per rows cleared (index = rows, index 0 unused)
    pub line_scores: [u32; 5],
    /// Combo multiplier increase per rows cleared
    pub combo_increments: [f32; 5],
    /// Multiplier at the start of a run
    pub combo_start: f32,
    /// Multiplier ceiling
    pub combo_cap: f32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            line_scores: LINE_SCORES,
            combo_increments: COMBO_INCREMENTS,
            combo_start: COMBO_START,
            combo_cap: COMBO_CAP,
        }
    }
}

/// Auto-repeat timing for one held direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    /// Hold time before repeats begin
    pub delay_ms: u32,
    /// Interval between repeats once started
    pub interval_ms: u32,
}

/// Complete rules configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulesConfig {
    pub scores: ScoreTable,
    pub fall_interval_ms: u32,
    pub horizontal_repeat: RepeatTiming,
    pub soft_drop_repeat: RepeatTiming,
    pub initial_placement_score: u32,
    pub placement_decay_step: u32,
    pub placement_decay_period_ms: u32,
    pub spawn: (i8, i8),
}

impl RulesConfig {
    /// Same rules with a different gravity interval
    pub fn with_fall_interval_ms(mut self, fall_interval_ms: u32) -> Self {
        self.fall_interval_ms = fall_interval_ms;
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            scores: ScoreTable::default(),
            fall_interval_ms: FALL_INTERVAL_MS,
            horizontal_repeat: RepeatTiming {
                delay_ms: REPEAT_DELAY_MS,
                interval_ms: HORIZONTAL_REPEAT_MS,
            },
            soft_drop_repeat: RepeatTiming {
                delay_ms: REPEAT_DELAY_MS,
                interval_ms: SOFT_DROP_REPEAT_MS,
            },
            initial_placement_score: INITIAL_PLACEMENT_SCORE,
            placement_decay_step: PLACEMENT_DECAY_STEP,
            placement_decay_period_ms: SCORE_DECAY_PERIOD_MS,
            spawn: (SPAWN_X, SPAWN_Y),
        }
    }
}
