use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Behavior for inputs that fall outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extrapolate {
    /// Continue the edge segment's slope past the boundary.
    #[default]
    Extend,
    /// Saturate at the boundary output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Curve applied to in-segment progress.
    #[serde(default)]
    pub ease: Ease,
    /// Policy below the first input point.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Policy above the last input point.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOpts {
    /// Clamp past the last point, extend before the first one.
    pub fn clamp_right() -> Self {
        Self {
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Replace the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Map `input` from `input_range` onto `output_range`, piecewise-linearly.
///
/// Both ranges must have the same length (at least two points) and `input_range` must be
/// strictly increasing, which rules out zero-width segments.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    check_ranges(input_range, output_range)?;
    if !input.is_finite() {
        return Err(ReelError::animation(format!(
            "interpolate input must be finite, got {input}"
        )));
    }

    // Segment whose right edge is the first point >= input; the edge segments also
    // serve inputs that fall outside the range.
    let last = input_range.len() - 1;
    let hi = input_range[1..last]
        .iter()
        .position(|&x| x >= input)
        .map_or(last, |i| i + 1);
    let lo = hi - 1;

    Ok(interpolate_segment(
        input,
        (input_range[lo], input_range[hi]),
        (output_range[lo], output_range[hi]),
        opts,
    ))
}

fn check_ranges(input_range: &[f64], output_range: &[f64]) -> ReelResult<()> {
    if input_range.len() != output_range.len() {
        return Err(ReelError::animation(format!(
            "input range has {} points but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(ReelError::animation(
            "interpolation ranges need at least 2 points",
        ));
    }
    if input_range
        .iter()
        .chain(output_range)
        .any(|v| !v.is_finite())
    {
        return Err(ReelError::animation(
            "interpolation ranges must be finite",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(ReelError::animation(format!(
            "input range must be strictly increasing, got {input_range:?}"
        )));
    }
    Ok(())
}

fn interpolate_segment(
    input: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    opts: InterpolateOpts,
) -> f64 {
    let mut x = input;

    if x < in_min {
        match opts.extrapolate_left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Extend => {}
        }
    }
    if x > in_max {
        match opts.extrapolate_right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Extend => {}
        }
    }

    if out_min == out_max {
        return out_min;
    }

    // Weighted form so t = 0 and t = 1 land exactly on the endpoints.
    let t = opts.ease.apply((x - in_min) / (in_max - in_min));
    out_min * (1.0 - t) + out_max * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
