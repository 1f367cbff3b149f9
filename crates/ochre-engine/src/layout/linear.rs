use core::f32::consts::FRAC_1_SQRT_2;

use crate::coords::{ColorRgba, Size, Vec2};
use crate::paint::{ColorStop, HorizontalSide, LinearDirection, VerticalSide};

use super::stops::{average_color, normalize_stop_positions, stop_positions};
use super::{pad_stops, RenderPlan};

/// Lays out a linear gradient in a box of `size`.
///
/// The gradient line passes through the box center; its length is the
/// projection of the box onto the gradient direction, so the first and last
/// corners hit by the line get the `0%` and `100%` colors.
pub fn layout_linear(
    size: Size,
    direction: LinearDirection,
    stops: &[ColorStop],
    repeating: bool,
) -> RenderPlan {
    if let [stop] = stops {
        return RenderPlan::Solid { color: stop.color };
    }

    let dir = direction_vector(size, direction);
    let vector_length = (size.width * dir.x).abs() + (size.height * dir.y).abs();

    let colors: Vec<ColorRgba> = stops.iter().map(|s| s.color).collect();
    let positions = stop_positions(stops, vector_length);
    let (positions, colors) = if repeating {
        (positions, colors)
    } else {
        let leading = (positions[0] == positions[1]).then(|| positions[0] - 1.0);
        pad_stops(&positions, &colors, leading)
    };

    let (first, last, positions) = normalize_stop_positions(&positions);
    if repeating && first == last {
        return RenderPlan::Solid { color: average_color(&colors, &positions) };
    }

    let start = Vec2::new(
        (size.width - dir.x * vector_length) / 2.0,
        (size.height - dir.y * vector_length) / 2.0,
    );
    let p0 = start + dir * first;
    let p1 = start + dir * last;

    RenderPlan::Linear { points: [p0.x, p0.y, p1.x, p1.y], positions, colors }
}

/// Unit vector of the gradient line. Positive x is right, positive y is down.
fn direction_vector(size: Size, direction: LinearDirection) -> Vec2 {
    match direction {
        LinearDirection::Corner { vertical, horizontal } => {
            let fx = if horizontal == HorizontalSide::Left { -1.0 } else { 1.0 };
            let fy = if vertical == VerticalSide::Top { -1.0 } else { 1.0 };
            let diagonal = size.diagonal();
            if diagonal == 0.0 {
                return Vec2::new(fx, fy) * FRAC_1_SQRT_2;
            }
            // x from the height and y from the width: the line is perpendicular
            // to the diagonal joining the two neighbouring corners.
            Vec2::new(fx * size.height / diagonal, fy * size.width / diagonal)
        }
        LinearDirection::Angle(angle) => Vec2::new(angle.sin(), -angle.cos()),
    }
}
