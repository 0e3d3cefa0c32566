use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::Bin;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Draws the bin, its placed pieces and (optionally) its free rectangles.
/// The y-axis points downward, as it does in the packing engine.
pub fn bin_to_svg(bin: &Bin, options: SvgDrawOptions, title: &str) -> Document {
    let bbox = bin.bbox();
    let margin = 0.05 * f64::max(bbox.width(), bbox.height());
    let theme = &options.theme;

    let stroke_width =
        f64::min(bbox.width(), bbox.height()) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f64::min(bbox.width(), bbox.height()) * 0.025;
    let piece_stroke = svg_util::change_brightness(theme.piece_fill, 0.5);

    let label = {
        //print some information above the left top of the bin
        let label_content = format!(
            "bin: {} | width: {:.3} | height: {:.3} | pieces: {} | density: {:.3}% | {}",
            bin.id,
            bbox.width(),
            bbox.height(),
            bin.placed_pieces().len(),
            bin.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set("y", bbox.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let bin_group = Group::new()
        .set("id", format!("bin_{}", bin.id))
        .add(svg_util::data_to_path(
            svg_util::rect_data(&bbox),
            &[
                ("fill", &*format!("{}", theme.bin_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "bin, id: {}, width: {:.3}, height: {:.3}",
            bin.id, bin.width, bin.height
        )));

    let pieces_group = {
        let mut pieces_group = Group::new().set("id", "pieces");
        for piece in bin.placed_pieces() {
            let p_bbox = piece.bbox();
            let mut piece_group = Group::new()
                .set("id", format!("piece_{}", piece.id))
                .add(svg_util::data_to_path(
                    svg_util::shape_data(piece.shape()),
                    &[
                        ("fill", &*format!("{}", theme.piece_fill)),
                        ("fill-rule", "evenodd"),
                        ("stroke", &*format!("{}", piece_stroke)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                ))
                .add(Title::new(format!(
                    "piece, id: {}, bbox: [x: {:.3}, y: {:.3}, w: {:.3}, h: {:.3}], rotation: {}°",
                    piece.id,
                    p_bbox.x_min,
                    p_bbox.y_min,
                    p_bbox.width(),
                    p_bbox.height(),
                    piece.rotation()
                )));
            if options.labels {
                let center = p_bbox.centroid();
                let size = f64::min(font_size, 0.5 * f64::min(p_bbox.width(), p_bbox.height()));
                piece_group = piece_group.add(
                    Text::new(format!("{}", piece.id))
                        .set("x", center.0)
                        .set("y", center.1)
                        .set("font-size", size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            pieces_group = pieces_group.add(piece_group);
        }
        pieces_group
    };

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                bbox.x_min - margin,
                bbox.y_min - 2.0 * margin,
                bbox.width() + 2.0 * margin,
                bbox.height() + 3.0 * margin,
            ),
        )
        .add(bin_group)
        .add(pieces_group);

    if options.free_rects {
        let mut free_group = Group::new().set("id", "free_rects");
        for r in bin.free_space().free_rects() {
            free_group = free_group.add(svg_util::data_to_path(
                svg_util::rect_data(r),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.free_rect_stroke)),
                    ("stroke-width", &*format!("{}", stroke_width)),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ("stroke-opacity", "0.8"),
                ],
            ));
        }
        document = document.add(free_group);
    }

    document.add(label)
}
