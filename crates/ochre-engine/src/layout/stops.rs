//! Color stop placement along a one-dimensional gradient axis.

use crate::coords::ColorRgba;
use crate::paint::{Color, ColorStop};

/// Resolves stop positions against a gradient vector of `vector_length`.
///
/// Percentages are resolved first, then [`resolve_stop_positions`] fills in
/// the rest.
pub fn stop_positions(stops: &[ColorStop], vector_length: f32) -> Vec<f32> {
    let positions: Vec<Option<f32>> = stops
        .iter()
        .map(|s| s.position.map(|p| p.resolve(vector_length)))
        .collect();
    resolve_stop_positions(vector_length, &positions)
}

/// Gives every stop an absolute position on the gradient vector.
///
/// - an unset first position is `0`, an unset last position is `vector_length`
/// - a set position lower than any position before it is clamped up to it
/// - the remaining unset positions are spread evenly between their set
///   neighbours
///
/// The output has the same length as `positions` and is non-decreasing.
///
/// # Panics
/// Panics if `positions` is empty.
pub fn resolve_stop_positions(vector_length: f32, positions: &[Option<f32>]) -> Vec<f32> {
    assert!(!positions.is_empty(), "at least one stop position is required");

    let mut set = positions.to_vec();
    let last = set.len() - 1;
    set[0] = Some(set[0].unwrap_or(0.0));
    set[last] = Some(set[last].unwrap_or(vector_length));

    let mut highest = f32::NEG_INFINITY;
    for position in set.iter_mut().flatten() {
        if *position < highest {
            *position = highest;
        } else {
            highest = *position;
        }
    }

    let mut resolved: Vec<f32> = Vec::with_capacity(set.len());
    let mut anchor = 0usize;
    for (i, position) in set.iter().enumerate() {
        let Some(position) = *position else { continue };
        if i > anchor + 1 {
            let base = resolved[anchor];
            let step = (position - base) / (i - anchor) as f32;
            resolved.extend((1..i - anchor).map(|k| base + k as f32 * step));
        }
        resolved.push(position);
        anchor = i;
    }
    resolved
}

/// Rescales non-decreasing positions into `[0, 1]`.
///
/// Returns `(first, last, normalized)` where `first`/`last` are the original
/// extent. A zero-length extent maps every position to `0`.
pub fn normalize_stop_positions(positions: &[f32]) -> (f32, f32, Vec<f32>) {
    let first = positions[0];
    let last = positions[positions.len() - 1];
    let total = last - first;
    let normalized = if total == 0.0 {
        vec![0.0; positions.len()]
    } else {
        positions.iter().map(|p| (p - first) / total).collect()
    };
    (first, last, normalized)
}

/// Average color of a gradient, weighting each segment by its length.
///
/// Colors are averaged premultiplied. When every position is equal the stops
/// are treated as evenly spaced. A fully transparent result is transparent
/// black.
///
/// # Panics
/// Panics with fewer than two stops or mismatched lengths.
pub fn average_color(colors: &[ColorRgba], positions: &[f32]) -> ColorRgba {
    let n = positions.len();
    assert!(n > 1, "average color needs at least two stops");
    assert_eq!(n, colors.len(), "one position per color");

    let evenly_spaced: Vec<f32>;
    let mut total = positions[n - 1] - positions[0];
    let positions = if total == 0.0 {
        evenly_spaced = (0..n).map(|i| i as f32).collect();
        total = (n - 1) as f32;
        &evenly_spaced[..]
    } else {
        positions
    };

    let total_weight = 2.0 * total;
    let sum = positions
        .windows(2)
        .zip(colors.windows(2))
        .fold(Color::transparent(), |acc, (p, c)| {
            let weight = (p[1] - p[0]) / total_weight;
            acc + (Color::from_straight(c[0]) + Color::from_straight(c[1])) * weight
        });
    sum.to_straight()
}

/// Color at `at` on the segment between two stops, interpolated premultiplied.
///
/// Expressed as the average of `[from, from, to, to]` split at the point that
/// gives `from` the weight `(to_pos - at) / (to_pos - from_pos)`.
pub fn interpolate_color(from: (ColorRgba, f32), to: (ColorRgba, f32), at: f32) -> ColorRgba {
    let (from_color, from_pos) = from;
    let (to_color, to_pos) = to;
    let split = from_pos + (to_pos - at);
    average_color(
        &[from_color, from_color, to_color, to_color],
        &[from_pos, split, split, to_pos],
    )
}
