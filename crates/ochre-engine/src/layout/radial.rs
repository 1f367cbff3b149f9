use core::f32::consts::SQRT_2;

use crate::coords::{ColorRgba, Rect, Size, Vec2};
use crate::paint::{ColorStop, RadialCenter, RadialShape, RadialSize, SizeExtent};

use super::repeat::{tile_radial, Circles};
use super::stops::{average_color, interpolate_color, normalize_stop_positions, stop_positions};
use super::{pad_stops, RenderPlan};

/// Radius substituted for a zero-sized ending shape axis.
const DEGENERATE_RADIUS: f32 = 1e-7;
/// Radius of the other axis when only one axis is zero, keeping the extreme aspect ratio.
const DEGENERATE_STRETCH: f32 = 1e7;

/// Lays out a radial gradient in a box of `size`.
///
/// Circles are expressed in a space scaled vertically by the plan's
/// `vertical_scale`, which turns the ending ellipse into a circle of radius
/// `size_x`.
pub fn layout_radial(
    size: Size,
    shape: RadialShape,
    ending: RadialSize,
    center: RadialCenter,
    stops: &[ColorStop],
    repeating: bool,
) -> RenderPlan {
    if let [stop] = stops {
        return RenderPlan::Solid { color: stop.color };
    }

    let center = center.resolve(size);
    let (size_x, size_y) = handle_degenerate(resolve_ending_size(size, shape, ending, center));
    let vertical_scale = size_y / size_x;

    let colors: Vec<ColorRgba> = stops.iter().map(|s| s.color).collect();
    let positions = stop_positions(stops, size_x);
    let (mut positions, mut colors) = if repeating {
        (positions, colors)
    } else {
        let leading = (positions[0] > 0.0 && positions[0] == positions[1]).then_some(0.0);
        pad_stops(&positions, &colors, leading)
    };

    if positions[0] < 0.0 {
        if repeating {
            positions = shift_into_positive(&positions);
        } else {
            match clip_negative(&positions, &colors) {
                Some((p, c)) => (positions, colors) = (p, c),
                None => return RenderPlan::Solid { color: colors[colors.len() - 1] },
            }
        }
    }

    let (first, last, positions) = normalize_stop_positions(&positions);
    if repeating && first == last {
        return RenderPlan::Solid { color: average_color(&colors, &positions) };
    }

    let circles = Circles {
        center: center.unscale_y(vertical_scale),
        inner: first,
        outer: last,
    };
    let (circles, positions, colors) = if repeating {
        match tile_radial(size, vertical_scale, circles, &positions, &colors) {
            Some(tiled) => tiled,
            None => return RenderPlan::Solid { color: average_color(&colors, &positions) },
        }
    } else {
        (circles, positions, colors)
    };

    RenderPlan::Radial { vertical_scale, points: circles.points(), positions, colors }
}

/// Radii `(x, y)` of the ending shape.
fn resolve_ending_size(size: Size, shape: RadialShape, ending: RadialSize, center: Vec2) -> (f32, f32) {
    let extent = match ending {
        RadialSize::Explicit { x, y } => return (x.resolve(size.width), y.resolve(size.height)),
        RadialSize::Extent(extent) => extent,
    };

    let left = center.x.abs();
    let right = (size.width - center.x).abs();
    let top = center.y.abs();
    let bottom = (size.height - center.y).abs();
    let pick = if extent.is_closest() { f32::min } else { f32::max };

    if extent.is_side() {
        return match shape {
            RadialShape::Circle => {
                let r = pick(pick(pick(left, right), top), bottom);
                (r, r)
            }
            RadialShape::Ellipse => (pick(left, right), pick(top, bottom)),
        };
    }

    let corner = pick_corner(size, center, extent);
    match shape {
        RadialShape::Circle => {
            let r = corner.length();
            (r, r)
        }
        RadialShape::Ellipse => (corner.x * SQRT_2, corner.y * SQRT_2),
    }
}

/// Absolute offsets from `center` to the closest or farthest box corner.
///
/// Corners are visited left-top, left-bottom, right-top, right-bottom and the
/// first one reaching the extreme distance wins.
fn pick_corner(size: Size, center: Vec2, extent: SizeExtent) -> Vec2 {
    let offsets = Rect::from_size(size).corners().map(|corner| (corner - center).abs());

    let mut best = offsets[0];
    let mut best_distance = best.length();
    for offset in &offsets[1..] {
        let distance = offset.length();
        let better = if extent.is_closest() {
            distance < best_distance
        } else {
            distance > best_distance
        };
        if better {
            best = *offset;
            best_distance = distance;
        }
    }
    best
}

/// Replaces zero radii so the vertical scale stays finite and positive.
fn handle_degenerate((x, y): (f32, f32)) -> (f32, f32) {
    match (x == 0.0, y == 0.0) {
        (true, true) => (DEGENERATE_RADIUS, DEGENERATE_RADIUS),
        (true, false) => (DEGENERATE_RADIUS, DEGENERATE_STRETCH),
        (false, true) => (DEGENERATE_STRETCH, DEGENERATE_RADIUS),
        (false, false) => (x, y),
    }
}

/// Moves a repeating gradient forward by whole periods until its first stop is
/// no longer negative. A zero-length period is left alone; it collapses to a
/// solid color afterwards.
fn shift_into_positive(positions: &[f32]) -> Vec<f32> {
    let span = positions[positions.len() - 1] - positions[0];
    if span <= 0.0 {
        return positions.to_vec();
    }
    let offset = span * (1.0 - positions[0] / span).ceil();
    positions.iter().map(|p| p + offset).collect()
}

/// Drops the part of a non-repeating gradient lying at negative radii.
///
/// Keeps everything from the first stop at exactly `0`; otherwise the stops
/// before the zero crossing are replaced by one stop at `0` carrying the
/// interpolated color. Returns `None` when every stop is at or below `0`.
fn clip_negative(positions: &[f32], colors: &[ColorRgba]) -> Option<(Vec<f32>, Vec<ColorRgba>)> {
    if positions[positions.len() - 1] <= 0.0 {
        return None;
    }
    let i = positions.iter().position(|&p| p >= 0.0)?;
    if positions[i] == 0.0 {
        return Some((positions[i..].to_vec(), colors[i..].to_vec()));
    }

    let at_zero = interpolate_color((colors[i - 1], positions[i - 1]), (colors[i], positions[i]), 0.0);
    let clipped_positions = core::iter::once(0.0).chain(positions[i..].iter().copied()).collect();
    let clipped_colors = core::iter::once(at_zero).chain(colors[i..].iter().copied()).collect();
    Some((clipped_positions, clipped_colors))
}
