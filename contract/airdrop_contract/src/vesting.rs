use crate::errors::AirdropError;

/// Amount of `total` released by `now` under a linear schedule starting at
/// `start` and lasting `duration` seconds.
///
/// Partial amounts are truncated so that the sum of claims taken at any
/// sequence of timestamps never exceeds `total`.
pub fn vested_amount(total: i128, start: u64, duration: u64, now: u64) -> Result<i128, AirdropError> {
    if now < start || total <= 0 {
        return Ok(0);
    }

    let elapsed = now - start;
    if duration == 0 || elapsed >= duration {
        return Ok(total);
    }

    // floor(total * elapsed / duration) without forming total * elapsed:
    // the whole part scales the quotient, the remainder term fits in u128
    // because both factors are below duration.
    let duration_wide = duration as i128;
    let whole = (total / duration_wide)
        .checked_mul(elapsed as i128)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    let remainder = (total % duration_wide) as u128;
    let partial = remainder * elapsed as u128 / duration as u128;

    whole
        .checked_add(partial as i128)
        .ok_or(AirdropError::ArithmeticOverflow)
}

/// Vested minus already claimed, floored at zero.
pub fn claimable_amount(
    total: i128,
    claimed: i128,
    start: u64,
    duration: u64,
    now: u64,
) -> Result<i128, AirdropError> {
    let vested = vested_amount(total, start, duration, now)?;
    Ok(if vested > claimed { vested - claimed } else { 0 })
}

/// Timestamp at which the schedule is fully vested.
pub fn vesting_end(start: u64, duration: u64) -> Result<u64, AirdropError> {
    start
        .checked_add(duration)
        .ok_or(AirdropError::ArithmeticOverflow)
}
