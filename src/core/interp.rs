/// Frame-rate independent exponential approach of `current` towards `target`.
///
/// The blend factor is `rate * dt` clamped to `[0, 1]`, so the result always
/// lies between `current` and `target` (inclusive). Negative or NaN `dt`
/// counts as no elapsed time.
#[inline]
pub fn step(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let a = blend_factor(rate, dt);
    if a >= 1.0 {
        return target;
    }
    // clamp away rounding so the result never leaves [current, target]
    let next = current + (target - current) * a;
    next.clamp(current.min(target), current.max(target))
}

#[inline]
pub fn blend_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt.max(0.0)).clamp(0.0, 1.0)
}
