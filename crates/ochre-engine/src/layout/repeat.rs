//! Tiling of repeating radial gradients.
//!
//! The output format draws a radial shading only between its two circles, so
//! a repeating gradient is expanded into as many periods as needed to reach
//! the farthest box corner, and back down to a zero-radius inner circle.

use crate::coords::{ColorRgba, Rect, Size, Vec2};

use super::stops::interpolate_color;

/// Most periods added on either side of a repeating radial gradient.
///
/// A gradient needing more repeats than this has a period far below a pixel
/// (or a degenerate ending shape stretched by up to `1e14`) and is painted
/// with its average color instead.
pub const MAX_REPEATS: usize = 1 << 16;

/// Inner and outer circle of a radial shading, sharing one center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circles {
    pub center: Vec2,
    pub inner: f32,
    pub outer: f32,
}

impl Circles {
    /// `(cx0, cy0, r0, cx1, cy1, r1)`.
    #[inline]
    pub fn points(self) -> [f32; 6] {
        [self.center.x, self.center.y, self.inner, self.center.x, self.center.y, self.outer]
    }
}

/// Expands one normalized period of a repeating radial gradient so that it
/// covers the whole box.
///
/// `positions` must run from `0` to `1` and `circles.inner < circles.outer`.
/// Position `t` of the result lies at radius `inner + t * (outer - inner)` of
/// the input circles, so the returned domain maps linearly onto the returned
/// radii.
///
/// Returns `None` when covering the box takes more than [`MAX_REPEATS`]
/// periods in either direction.
pub fn tile_radial(
    size: Size,
    vertical_scale: f32,
    circles: Circles,
    positions: &[f32],
    colors: &[ColorRgba],
) -> Option<(Circles, Vec<f32>, Vec<ColorRgba>)> {
    let period = circles.outer - circles.inner;
    let mut tiled = circles;

    // ── outward ───────────────────────────────────────────────────────────

    let scaled_box = Rect::new(0.0, 0.0, size.width, size.height / vertical_scale);
    let max_distance = scaled_box
        .corners()
        .iter()
        .map(|&corner| corner.distance(circles.center))
        .fold(0.0, f32::max);

    let after = repeat_count((max_distance - circles.outer) / period)?;
    let outer_positions: Vec<f32> = periods(positions, 0.0, after + 1).collect();
    let outer_colors = colors.repeat(after + 1);
    tiled.outer += period * after as f32;

    if circles.inner == 0.0 {
        return Some((tiled, outer_positions, outer_colors));
    }

    // ── inward ────────────────────────────────────────────────────────────

    let repeat_before = circles.inner / period;
    let full_count = repeat_count(repeat_before.floor())?;
    let full = full_count as f32;
    let partial = repeat_before - repeat_before.floor();
    tiled.inner = 0.0;

    let mut lead_positions = Vec::new();
    let mut lead_colors = Vec::new();
    if partial > 0.0 {
        // The center falls at `ratio` inside one more, partial, period.
        let ratio = 1.0 - partial;
        let shift = -full - 1.0;
        let k = positions.iter().rposition(|&p| p <= ratio).unwrap_or(0);
        let from = if positions[k] == ratio {
            k
        } else {
            let at_center =
                interpolate_color((colors[k], positions[k]), (colors[k + 1], positions[k + 1]), ratio);
            lead_positions.push(ratio + shift);
            lead_colors.push(at_center);
            k + 1
        };
        lead_positions.extend(positions[from..].iter().map(|p| p + shift));
        lead_colors.extend_from_slice(&colors[from..]);
    }

    let positions_out = lead_positions
        .into_iter()
        .chain(periods(positions, -full, full_count))
        .chain(outer_positions)
        .collect();
    let colors_out = lead_colors
        .into_iter()
        .chain(colors.repeat(full_count))
        .chain(outer_colors)
        .collect();
    Some((tiled, positions_out, colors_out))
}

/// Whole periods needed to cover `wanted` (fractional) periods, or `None`
/// past [`MAX_REPEATS`].
fn repeat_count(wanted: f32) -> Option<usize> {
    if wanted.is_nan() || wanted <= 0.0 {
        return Some(0);
    }
    let count = wanted.ceil();
    if count > MAX_REPEATS as f32 {
        log::debug!("{count} gradient repeats exceed {MAX_REPEATS}, painting the average color");
        return None;
    }
    Some(count as usize)
}

/// `count` consecutive copies of `positions`, the first shifted by `from`.
fn periods(positions: &[f32], from: f32, count: usize) -> impl Iterator<Item = f32> + '_ {
    (0..count).flat_map(move |i| {
        let offset = from + i as f32;
        positions.iter().map(move |p| offset + p)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_radial, RenderPlan};
    use crate::paint::{ColorStop, LengthPercentage, RadialCenter, RadialShape, RadialSize, SizeExtent};

    const RED: ColorRgba = ColorRgba::rgb(1.0, 0.0, 0.0);
    const GREEN: ColorRgba = ColorRgba::rgb(0.0, 1.0, 0.0);
    const BLUE: ColorRgba = ColorRgba::rgb(0.0, 0.0, 1.0);

    fn close(a: f32, b: f32) -> bool { (a - b).abs() <= 1e-3 }

    fn circles(inner: f32, outer: f32) -> Circles {
        Circles { center: Vec2::new(50.0, 50.0), inner, outer }
    }

    /// Radius per unit of position must equal the original period.
    fn assert_domain_matches_radii(c: Circles, positions: &[f32], period: f32) {
        let span = positions[positions.len() - 1] - positions[0];
        assert!(close((c.outer - c.inner) / span, period), "{c:?} over {span}");
    }

    #[test]
    fn outward_repeats_reach_farthest_corner() {
        let (c, positions, colors) =
            tile_radial(Size::new(100.0, 100.0), 1.0, circles(0.0, 10.0), &[0.0, 1.0], &[RED, BLUE]).unwrap();
        // farthest corner is ~70.7 away: 7 more periods
        assert_eq!(positions.len(), 16);
        assert_eq!(colors.len(), 16);
        assert_eq!(&positions[..4], &[0.0, 1.0, 1.0, 2.0]);
        assert_eq!(positions[15], 8.0);
        assert_eq!((c.inner, c.outer), (0.0, 80.0));
        assert_eq!(colors[14], RED);
    }

    #[test]
    fn nothing_to_add_when_box_is_covered() {
        let input = Circles { center: Vec2::new(5.0, 5.0), inner: 0.0, outer: 100.0 };
        let (c, positions, colors) = tile_radial(Size::new(10.0, 10.0), 1.0, input, &[0.0, 1.0], &[RED, BLUE]).unwrap();
        assert_eq!(c, input);
        assert_eq!(positions, vec![0.0, 1.0]);
        assert_eq!(colors, vec![RED, BLUE]);
    }

    #[test]
    fn inward_whole_periods_reach_center() {
        let (c, positions, _) =
            tile_radial(Size::new(10.0, 10.0), 1.0, Circles { center: Vec2::new(5.0, 5.0), inner: 20.0, outer: 30.0 }, &[0.0, 1.0], &[RED, BLUE]).unwrap();
        assert_eq!(c.inner, 0.0);
        assert_eq!(positions, vec![-2.0, -1.0, -1.0, 0.0, 0.0, 1.0]);
        assert_domain_matches_radii(c, &positions, 10.0);
    }

    #[test]
    fn inward_partial_period_landing_on_a_stop() {
        let (c, positions, colors) = tile_radial(
            Size::new(100.0, 100.0),
            1.0,
            circles(25.0, 35.0),
            &[0.0, 0.5, 1.0],
            &[RED, GREEN, BLUE],
        )
        .unwrap();
        assert_eq!((c.inner, c.outer), (0.0, 75.0));
        assert_eq!(positions.len(), 2 + 6 + 15);
        assert_eq!(&positions[..5], &[-2.5, -2.0, -2.0, -1.5, -1.0]);
        assert_eq!(&colors[..3], &[GREEN, BLUE, RED]);
        assert_domain_matches_radii(c, &positions, 10.0);
    }

    #[test]
    fn inward_partial_period_between_stops_is_interpolated() {
        let (c, positions, colors) =
            tile_radial(Size::new(100.0, 100.0), 1.0, circles(24.0, 34.0), &[0.0, 1.0], &[RED, BLUE]).unwrap();
        assert_eq!(c.inner, 0.0);
        assert!(close(positions[0], -2.4), "{positions:?}");
        assert_eq!(positions[1], -2.0);
        assert!(close(colors[0].r, 0.4) && close(colors[0].b, 0.6), "{:?}", colors[0]);
        assert_eq!(colors[1], BLUE);
        assert_eq!(positions.len(), colors.len());
        assert_domain_matches_radii(c, &positions, 10.0);
    }

    #[test]
    fn too_many_outward_repeats_give_up() {
        let tiled = tile_radial(Size::new(10.0, 10.0), 1e-14, circles(0.0, 10.0), &[0.0, 1.0], &[RED, BLUE]);
        assert!(tiled.is_none());
    }

    #[test]
    fn too_many_inward_repeats_give_up() {
        let input = Circles { center: Vec2::zero(), inner: 1_000_000.0, outer: 1_000_001.0 };
        assert!(tile_radial(Size::new(0.0, 0.0), 1.0, input, &[0.0, 1.0], &[RED, BLUE]).is_none());
    }

    #[test]
    fn fine_period_still_reaches_farthest_corner() {
        let stops = [ColorStop::at_px(RED, 0.0), ColorStop::at_px(BLUE, 0.1)];
        let plan = layout_radial(
            Size::new(1000.0, 1000.0),
            RadialShape::Circle,
            RadialSize::Explicit { x: LengthPercentage::px(50.0), y: LengthPercentage::px(50.0) },
            RadialCenter::default(),
            &stops,
            true,
        );
        let RenderPlan::Radial { points, positions, colors, .. } = plan else {
            panic!("expected radial plan");
        };
        assert!(points[5] >= 500.0f32.hypot(500.0), "outer radius {}", points[5]);
        assert_eq!(points[2], 0.0);
        assert_eq!(positions.len(), colors.len());
    }

    #[test]
    fn sub_pixel_period_in_huge_box_paints_average() {
        let stops = [ColorStop::at_px(RED, 0.0), ColorStop::at_px(BLUE, 0.001)];
        let plan = layout_radial(
            Size::new(1000.0, 1000.0),
            RadialShape::Circle,
            RadialSize::Explicit { x: LengthPercentage::px(50.0), y: LengthPercentage::px(50.0) },
            RadialCenter::default(),
            &stops,
            true,
        );
        let RenderPlan::Solid { color } = plan else {
            panic!("expected a solid plan, got {plan:?}");
        };
        assert!(close(color.r, 0.5) && close(color.b, 0.5), "{color:?}");
    }

    #[test]
    fn repeating_layout_with_negative_start_tiles_to_center() {
        let stops = [ColorStop::at_px(RED, -10.0), ColorStop::at_px(BLUE, 30.0)];
        let plan = layout_radial(
            Size::new(100.0, 100.0),
            RadialShape::Circle,
            RadialSize::Extent(SizeExtent::FarthestCorner),
            RadialCenter::default(),
            &stops,
            true,
        );
        let RenderPlan::Radial { points, positions, colors, .. } = plan else {
            panic!("expected radial plan");
        };
        assert_eq!(points[2], 0.0);
        assert!(points[5] >= 50.0f32.hypot(50.0));
        assert!(positions[0] < 0.0);
        assert_eq!(positions.len(), colors.len());
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
        let c = Circles { center: Vec2::new(points[0], points[1]), inner: points[2], outer: points[5] };
        assert_domain_matches_radii(c, &positions, 40.0);
    }
}
