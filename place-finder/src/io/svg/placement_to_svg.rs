use crate::geometry::primitives::{Placement, Rect, Size};
use crate::io::svg::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Title};

/// Draws the canvas, its occupied zones and (if any) the placement.
///
/// `step` is only used when [`SvgDrawOptions::draw_grid`] is enabled.
pub fn placement_to_svg(
    canvas: Size,
    occupied: &[Rect],
    placement: Option<&Placement>,
    step: u32,
    options: SvgDrawOptions,
) -> Document {
    let theme = options.theme.palette();
    let (width, height) = (canvas.width as f32, canvas.height as f32);
    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;

    let canvas_group = Group::new().set("id", "canvas").add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", theme.canvas_fill)
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width),
    );

    let occupied_group = occupied.iter().enumerate().fold(
        Group::new().set("id", "occupied"),
        |group, (i, o)| {
            let title = Title::new(format!(
                "occupied zone {i}, [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
                o.x_min, o.y_min, o.x_max, o.y_max
            ));
            group.add(
                Rectangle::new()
                    .set("x", o.x_min)
                    .set("y", o.y_min)
                    .set("width", o.width())
                    .set("height", o.height())
                    .set("fill", theme.occupied_fill)
                    .set("fill-opacity", 0.8)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .add(title),
            )
        },
    );

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .add(canvas_group)
        .add(occupied_group);

    if options.draw_grid {
        let step = u32::max(step, 1) as usize;
        let vertical = (0..=canvas.width).step_by(step).map(|x| {
            Line::new()
                .set("x1", x)
                .set("y1", 0)
                .set("x2", x)
                .set("y2", height)
        });
        let horizontal = (0..=canvas.height).step_by(step).map(|y| {
            Line::new()
                .set("x1", 0)
                .set("y1", y)
                .set("x2", width)
                .set("y2", y)
        });
        let grid_group = vertical.chain(horizontal).fold(
            Group::new()
                .set("id", "grid")
                .set("stroke", theme.grid_stroke)
                .set("stroke-width", 0.5 * stroke_width)
                .set("stroke-opacity", 0.3),
            |group, line| group.add(line),
        );
        document = document.add(grid_group);
    }

    if let Some(p) = placement {
        let placement_group = Group::new().set("id", "placement").add(
            Rectangle::new()
                .set("x", p.x)
                .set("y", p.y)
                .set("width", p.width)
                .set("height", p.height)
                .set("fill", theme.placement_fill)
                .set("fill-opacity", 0.8)
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width)
                .set("stroke-dasharray", format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width))
                .add(Title::new(format!("placement {p}"))),
        );
        document = document.add(placement_group);
    }

    document
}
