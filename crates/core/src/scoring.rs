//! Scoring module - line clear points and the combo multiplier
//!
//! Rules:
//! - Rows cleared by one lock score `round(line_scores[n] * multiplier)`.
//! - The multiplier then grows by `combo_increments[n]`, capped at `combo_cap`.
//! - A lock that clears nothing changes neither score nor multiplier.
//! - The multiplier never decreases during a run; only a full reset lowers it.
//!
//! Counts outside 1..=4 score nothing.

use crate::config::ScoreTable;

/// Points for clearing `rows` rows at `multiplier`
pub fn calculate_line_score(table: &ScoreTable, rows: usize, multiplier: f32) -> u32 {
    if rows == 0 || rows >= table.line_scores.len() {
        return 0;
    }
    (table.line_scores[rows] as f32 * multiplier).round() as u32
}

/// Multiplier after clearing `rows` rows
pub fn next_multiplier(table: &ScoreTable, rows: usize, multiplier: f32) -> f32 {
    if rows == 0 || rows >= table.combo_increments.len() {
        return multiplier;
    }
    if multiplier >= table.combo_cap {
        return multiplier;
    }
    (multiplier + table.combo_increments[rows]).min(table.combo_cap)
}

/// Run-wide score state
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreState {
    table: ScoreTable,
    score: u32,
    combo_multiplier: f32,
    /// Rows cleared by the current lock, consumed by [`ScoreState::settle`]
    rows_this_turn: u32,
}

impl ScoreState {
    pub fn new(table: ScoreTable) -> Self {
        Self {
            table,
            score: 0,
            combo_multiplier: table.combo_start,
            rows_this_turn: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo_multiplier(&self) -> f32 {
        self.combo_multiplier
    }

    pub fn rows_this_turn(&self) -> u32 {
        self.rows_this_turn
    }

    /// Count rows cleared by the current lock
    pub fn record_rows(&mut self, rows: usize) {
        self.rows_this_turn += rows as u32;
    }

    /// Score the pending rows and reset the counter.
    ///
    /// Returns the points awarded, or None when no rows were pending.
    pub fn settle(&mut self) -> Option<u32> {
        let rows = std::mem::take(&mut self.rows_this_turn) as usize;
        if rows == 0 {
            return None;
        }
        Some(self.line_cleared(rows))
    }

    /// Apply one clear event of `rows` rows, returning the points awarded
    pub fn line_cleared(&mut self, rows: usize) -> u32 {
        let points = calculate_line_score(&self.table, rows, self.combo_multiplier);
        self.score = self.score.saturating_add(points);
        self.combo_multiplier = next_multiplier(&self.table, rows, self.combo_multiplier);
        points
    }

    /// Add a locked piece's placement score
    pub fn add_placement(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Full reset: score 0, multiplier back to its start value
    pub fn reset(&mut self) {
        *self = Self::new(self.table);
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new(ScoreTable::default())
    }
}
