use anyhow::{Context, Result};
use ochre_engine::coords::{ColorRgba, Size};
use ochre_engine::layout::RenderPlan;
use ochre_engine::logging::{init_logging, LoggingConfig};
use ochre_engine::paint::{
    ColorStop, Gradient, HorizontalSide, LengthPercentage, LinearDirection, RadialCenter, RadialShape,
    RadialSize, SizeExtent, VerticalSide,
};
use ochre_engine::scene::{DrawCmd, DrawList, ImageRendering};
use ochre_engine::shading::{ExponentialFunction, StitchingFunction};
use ochre_image::Image;

const RED: ColorRgba = ColorRgba::rgb(1.0, 0.0, 0.0);
const GREEN: ColorRgba = ColorRgba::rgb(0.0, 0.5, 0.0);
const BLUE: ColorRgba = ColorRgba::rgb(0.0, 0.0, 1.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let size = parse_size(std::env::args().skip(1))?;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          OCHRE GRADIENT STUDIO         ║");
    println!("  ║   layout · shading · draw recording    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();
    println!("  box {} x {}", size.width, size.height);

    for (name, gradient) in gallery() {
        let plan = gradient.layout(size);
        let image = Image::from(gradient);
        let mut list = DrawList::new();
        image.draw(&mut list, size, ImageRendering::Auto);

        println!();
        println!("  ── {name}");
        describe(&plan);
        for cmd in list.items() {
            println!("     > {}", summarize(cmd));
        }
        log::debug!("{name}: {} draw commands", list.items().len());
    }
    println!();
    Ok(())
}

/// `[width] [height]`, defaulting to a 200 × 100 box.
fn parse_size(mut args: impl Iterator<Item = String>) -> Result<Size> {
    let mut next = |default: f32, what: &str| -> Result<f32> {
        match args.next() {
            Some(arg) => arg.parse().with_context(|| format!("invalid {what}: {arg:?}")),
            None => Ok(default),
        }
    };
    let size = Size::new(next(200.0, "width")?, next(100.0, "height")?);
    anyhow::ensure!(size.is_valid(), "box size must be finite and non-negative");
    Ok(size)
}

fn gallery() -> Vec<(&'static str, Gradient)> {
    vec![
        (
            "linear-gradient(red, blue)",
            Gradient::linear(LinearDirection::to_bottom(), vec![ColorStop::auto(RED), ColorStop::auto(BLUE)]),
        ),
        (
            "linear-gradient(to top right, red, green 40%, blue)",
            Gradient::linear(
                LinearDirection::Corner { vertical: VerticalSide::Top, horizontal: HorizontalSide::Right },
                vec![ColorStop::auto(RED), ColorStop::at_percent(GREEN, 40.0), ColorStop::auto(BLUE)],
            ),
        ),
        (
            "repeating-linear-gradient(45deg, red 0 10px, blue 20px)",
            Gradient::linear(
                LinearDirection::Angle(std::f32::consts::FRAC_PI_4),
                vec![ColorStop::at_px(RED, 0.0), ColorStop::at_px(RED, 10.0), ColorStop::at_px(BLUE, 20.0)],
            )
            .repeating(),
        ),
        (
            "radial-gradient(circle closest-side, red, blue)",
            Gradient::radial(
                RadialShape::Circle,
                RadialSize::Extent(SizeExtent::ClosestSide),
                RadialCenter::default(),
                vec![ColorStop::auto(RED), ColorStop::auto(BLUE)],
            ),
        ),
        (
            "radial-gradient(ellipse 40% 20px at 25% 75%, red, green, blue)",
            Gradient::radial(
                RadialShape::Ellipse,
                RadialSize::Explicit { x: LengthPercentage::percent(40.0), y: LengthPercentage::px(20.0) },
                RadialCenter {
                    origin_x: HorizontalSide::Left,
                    x: LengthPercentage::percent(25.0),
                    origin_y: VerticalSide::Top,
                    y: LengthPercentage::percent(75.0),
                },
                vec![ColorStop::auto(RED), ColorStop::auto(GREEN), ColorStop::auto(BLUE)],
            ),
        ),
        (
            "repeating-radial-gradient(red -10px, blue 10px)",
            Gradient::radial(
                RadialShape::Circle,
                RadialSize::Extent(SizeExtent::FarthestCorner),
                RadialCenter::default(),
                vec![ColorStop::at_px(RED, -10.0), ColorStop::at_px(BLUE, 10.0)],
            )
            .repeating(),
        ),
        ("linear-gradient(green)", Gradient::linear(LinearDirection::to_bottom(), vec![ColorStop::auto(GREEN)])),
    ]
}

fn describe(plan: &RenderPlan) {
    match plan {
        RenderPlan::Solid { color } => println!("     solid {:?}", color.to_array()),
        RenderPlan::Linear { points, positions, .. } => {
            println!("     linear {points:?}");
            println!("     {} stops {positions:?}", positions.len());
        }
        RenderPlan::Radial { vertical_scale, points, positions, .. } => {
            println!("     radial {points:?} scale {vertical_scale}");
            println!("     {} stops {positions:?}", positions.len());
        }
    }
}

fn summarize(cmd: &DrawCmd) -> String {
    match cmd {
        DrawCmd::Shading(shading) => format!(
            "shading type {}, function type {} over {} type {} functions, extend {:?}",
            shading.kind.shading_type(),
            StitchingFunction::FUNCTION_TYPE,
            shading.function.functions.len(),
            ExponentialFunction::FUNCTION_TYPE,
            shading.extend
        ),
        other => format!("{other:?}"),
    }
}
