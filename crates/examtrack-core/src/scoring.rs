//! Net score calculation.

use crate::model::ExamConfig;

/// Round to 2 decimal places.
///
/// Ties round toward positive infinity (`floor(x + 0.5)`), so stored scores
/// match the values earlier versions of the tracker produced.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Weighted sum of the answer counts using the config's multipliers, rounded
/// to 2 decimals.
///
/// No bounds checking is done here; enforcing a question cap is up to the
/// caller (see [`ExamConfig::fits_question_cap`]).
pub fn calculate_net(config: &ExamConfig, correct: u32, wrong: u32, blank: u32) -> f64 {
    let net = f64::from(correct) * config.correct_multiplier
        + f64::from(wrong) * config.wrong_multiplier
        + f64::from(blank) * config.blank_multiplier;
    round2(net)
}
