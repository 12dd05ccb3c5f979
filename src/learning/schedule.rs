use crate::ALPHA_OFFSET;
use crate::ALPHA_SCALE;
use crate::Probability;

/// Learning rate after `n` visits: α(n) = 10 / (9 + n).
///
/// Strictly decreasing in `n`, equal to 1 on the first visit, and
/// harmonic enough that repeated sampling still converges.
pub fn alpha(n: u32) -> Probability {
    ALPHA_SCALE / (ALPHA_OFFSET + n as Probability)
}
