//! Integer basis-point arithmetic for reputation values.
//!
//! Every division truncates. Products are widened to `u64` before dividing,
//! and every result is clamped into `[0, MAX_BP]`.

use crate::types::{Error, ModelScores, Weights};

pub const MAX_BP: u32 = 10_000;
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

pub fn is_bp(value: u32) -> bool {
    value <= MAX_BP
}

/// Average over revealed scores only. Callers pass `revealed_count`, not
/// the total submission count, so private submissions leave it unchanged.
pub fn human_average_bp(sum_bp: u64, revealed_count: u32) -> u32 {
    if revealed_count == 0 {
        return 0;
    }
    (sum_bp / revealed_count as u64).min(MAX_BP as u64) as u32
}

/// Weighted blend of the two score sources. Weights need not sum to
/// `MAX_BP`; an over-weighted blend saturates at `MAX_BP`.
pub fn blend_bp(human_avg_bp: u32, auto_bp: u32, weights: &Weights) -> u32 {
    let human = human_avg_bp as u64 * weights.human_weight_bp as u64;
    let auto = auto_bp as u64 * weights.auto_weight_bp as u64;
    ((human + auto) / MAX_BP as u64).min(MAX_BP as u64) as u32
}

/// Linear decay: `bps_per_day` is subtracted for each whole day elapsed
/// since `last_update`, floored at zero.
pub fn decay_bp(raw_bp: u32, last_update: u64, now: u64, bps_per_day: u32) -> u32 {
    let elapsed_days = now.saturating_sub(last_update) / SECONDS_PER_DAY;
    let decay = elapsed_days.saturating_mul(bps_per_day as u64);
    (raw_bp as u64).saturating_sub(decay) as u32
}

/// Maps a `0..=scale_max` rating onto basis points, e.g. 5 of 5 -> 10000.
pub fn rating_to_bp(rating: u32, scale_max: u32) -> Result<u32, Error> {
    if scale_max == 0 || rating > scale_max {
        return Err(Error::OutOfRange);
    }
    Ok((rating as u64 * MAX_BP as u64 / scale_max as u64) as u32)
}

/// Folds one admitted submission into the human aggregate. Private
/// submissions count toward `human_count` but leave the sum untouched.
pub fn record_human_feedback(
    scores: &mut ModelScores,
    revealed_score_bp: Option<u32>,
    now: u64,
) -> Result<(), Error> {
    let human_count = scores.human_count.checked_add(1).ok_or(Error::OutOfRange)?;
    if let Some(score_bp) = revealed_score_bp {
        if !is_bp(score_bp) {
            return Err(Error::OutOfRange);
        }
        scores.human_sum_bp = scores
            .human_sum_bp
            .checked_add(score_bp as u64)
            .ok_or(Error::OutOfRange)?;
        scores.revealed_count = scores.revealed_count.saturating_add(1);
    }
    scores.human_count = human_count;
    scores.last_update = now;
    Ok(())
}
