/// Fixed-point scaling factor.
///
/// Reward-per-unit values are stored multiplied by this constant so that
/// sub-unit accrual survives integer arithmetic. 10^18 gives 18 decimal
/// places, enough for a per-second rate spread over very large pools.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Largest accepted `reward_rate`: one second of emission, scaled, still
/// fits in an `i128`.
pub const MAX_REWARD_RATE: i128 = i128::MAX / SCALE;

// ── Core accrual math ───────────────────────────────────────────────────────

/// Advance the global reward-per-unit accumulator.
///
/// ```text
/// Δrpu = reward_rate × elapsed × SCALE / total_principal
/// new_rpu = stored + Δrpu
/// ```
///
/// With nothing staked the accumulator is returned unchanged: no one can
/// earn, and the division by zero is avoided.
///
/// Saturates instead of failing. A stuck accumulator would otherwise lock
/// every principal-changing operation, including the rate reset that stops
/// accrual; payouts stay bounded by the pool's reward balance either way.
///
/// # Arguments
/// * `stored`          – current `reward_per_unit_stored` (scaled by SCALE)
/// * `reward_rate`     – reward units emitted per second across the pool
/// * `elapsed`         – seconds since the last settlement
/// * `total_principal` – sum of all principal
pub fn reward_per_unit(
    stored: i128,
    reward_rate: i128,
    elapsed: u64,
    total_principal: i128,
) -> i128 {
    if total_principal <= 0 || elapsed == 0 || reward_rate <= 0 {
        return stored;
    }

    // Multiply first; the division truncates toward zero, in the pool's favour.
    let delta = reward_rate
        .saturating_mul(SCALE)
        .saturating_mul(i128::from(elapsed))
        / total_principal;

    stored.saturating_add(delta)
}

/// Reward owed to one participant.
///
/// ```text
/// earned = accrued + principal × (current_rpu − rpu_paid) / SCALE
/// ```
///
/// `rpu_paid` is the checkpoint taken at the participant's last settlement,
/// so only accumulation since then is counted; `accrued` carries everything
/// settled earlier and not yet paid out. Saturates like `reward_per_unit`.
pub fn earned(principal: i128, current_rpu: i128, rpu_paid: i128, accrued: i128) -> i128 {
    let pending = principal.saturating_mul(current_rpu.saturating_sub(rpu_paid)) / SCALE;

    accrued.saturating_add(pending)
}

/// Rate that spreads `total_reward` evenly over `duration` seconds.
///
/// Integer division: the remainder `total_reward % duration` is never
/// emitted.
pub fn rate_for(total_reward: i128, duration: u64) -> Option<i128> {
    total_reward.checked_div(i128::from(duration))
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure math, no Soroban environment.
