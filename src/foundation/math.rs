pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `x` inside `[lo, hi]` as a fraction; a zero-width interval maps to the middle.
pub(crate) fn normalize(x: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span == 0.0 { 0.5 } else { (x - lo) / span }
}

/// Min and max of `value(item)` over `items`, skipping NaN. `None` when nothing is comparable.
pub fn extent<T>(items: &[T], value: impl Fn(&T) -> f64) -> Option<(f64, f64)> {
    items
        .iter()
        .map(value)
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let pos = 10f64.powf(-power) / factor;
        i1 = (start * pos).round();
        i2 = (stop * pos).round();
        if i1 / pos < start {
            i1 += 1.0;
        }
        if i2 / pos > stop {
            i2 -= 1.0;
        }
        inc = -pos;
    } else {
        let pos = 10f64.powf(power) * factor;
        i1 = (start / pos).round();
        i2 = (stop / pos).round();
        if i1 * pos < start {
            i1 += 1.0;
        }
        if i2 * pos > stop {
            i2 -= 1.0;
        }
        inc = pos;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Upper bound on the requested tick count.
pub(crate) const MAX_TICKS: usize = 1000;

/// Roughly `count` human-friendly (1, 2, 5 x 10^k) values covering `[start, stop]`.
///
/// `count` is capped at [`MAX_TICKS`].
pub(crate) fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count.min(MAX_TICKS);
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if i1.is_nan() || i2.is_nan() || i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let i = i as f64;
            let k = if reverse { i2 - i } else { i1 + i };
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
