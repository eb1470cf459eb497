//! Code to draw a catalogue of stars to an SVG string.  Each polygon size gets its own row, and
//! each distinct star is drawn in its own grid square, labelled with its step pattern.

use itertools::Itertools;
use rgb::RGB8;
use simple_xml_builder::XMLElement;

use crate::{Star, V2};

/// Draw every star in `catalogue` (as produced by [`Enumerator::catalogue`]) to an SVG string
///
/// [`Enumerator::catalogue`]: crate::Enumerator::catalogue
pub fn gen_svg_string(catalogue: &[(usize, Vec<Star>)], opts: &RenderingOpts) -> String {
    gen_svg(catalogue, opts).to_string()
}

/// Generate the root SVG element for a catalogue of stars
pub fn gen_svg(catalogue: &[(usize, Vec<Star>)], opts: &RenderingOpts) -> XMLElement {
    let num_cols = catalogue
        .iter()
        .map(|(_size, stars)| stars.len())
        .max()
        .unwrap_or(0)
        .max(1);
    let num_rows = catalogue.len().max(1);

    let mut root = XMLElement::new("svg");
    root.add_attribute("width", &(num_cols as f32 * opts.grid_size).to_string());
    root.add_attribute("height", &(num_rows as f32 * opts.grid_size).to_string());
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");

    for (row, (_size, stars)) in catalogue.iter().enumerate() {
        for (col, star) in stars.iter().enumerate() {
            let centre = V2::new(
                opts.grid_size / 2.0 + col as f32 * opts.grid_size,
                opts.grid_size / 2.0 + row as f32 * opts.grid_size,
            );
            root.add_child(gen_star_elem(star, centre, opts));
        }
    }

    root
}

/// Creates a `<g>` element containing one `<polygon>` per [`Polyline`] of `star`, plus a label
/// showing the star's step pattern.
///
/// [`Polyline`]: crate::Polyline
pub fn gen_star_elem(star: &Star, centre: V2, opts: &RenderingOpts) -> XMLElement {
    let radius = opts.grid_size / 2.0 * opts.radius_fraction;
    let mut group = XMLElement::new("g");

    for (poly_idx, coords) in star.corner_coords(centre, radius).iter().enumerate() {
        // A whitespace-delimited list of `x,y` pairs
        let coord_string = coords
            .iter()
            .map(|pt| format!("{},{}", pt.x, pt.y))
            .join(" ");

        let mut poly_elem = XMLElement::new("polygon");
        poly_elem.add_attribute("points", &coord_string);
        poly_elem.add_attribute("fill", "none");
        poly_elem.add_attribute("stroke", &opts.poly_color(poly_idx).to_string());
        poly_elem.add_attribute("stroke-width", &opts.stroke_width.to_string());
        poly_elem.add_attribute("stroke-linejoin", "round");
        group.add_child(poly_elem);
    }

    let mut label = XMLElement::new("text");
    label.add_attribute("x", &(centre.x + opts.label_offset).to_string());
    label.add_attribute("y", &(centre.y - opts.label_offset).to_string());
    label.add_attribute("font-size", &opts.font_size.to_string());
    label.add_attribute("font-family", &opts.font_family);
    label.add_text(&star.steps().to_string());
    group.add_child(label);

    group
}

/// Configuration for how the stars should be rendered
#[derive(Debug, Clone)]
pub struct RenderingOpts {
    /// The side length of the grid square that each star is drawn in
    pub grid_size: f32,
    /// How much of the half-width of the grid square is covered by each star's radius
    pub radius_fraction: f32,
    /// Width of the lines making up the stars
    pub stroke_width: f32,
    /// How far right of and above the centre of a star its label is drawn
    pub label_offset: f32,
    pub font_size: f32,
    pub font_family: String,
    /// The colours of each [`Polyline`] of a star.  The first is used for single-polyline stars;
    /// if a star has more polylines than colours, they are reused.
    ///
    /// [`Polyline`]: crate::Polyline
    pub palette: Vec<RGB8>,
}

impl RenderingOpts {
    /// The colour used for the `poly_idx`th [`Polyline`](crate::Polyline) of a star
    pub fn poly_color(&self, poly_idx: usize) -> RGB8 {
        if self.palette.is_empty() {
            return colors::BLACK;
        }
        self.palette[poly_idx % self.palette.len()]
    }
}

impl Default for RenderingOpts {
    fn default() -> Self {
        use colors::*;

        let grid_size = 80.0;
        Self {
            grid_size,
            radius_fraction: 0.9,
            stroke_width: 3.0,
            label_offset: 25.0,
            font_size: 12.0,
            font_family: "sans-serif".to_owned(),
            // Single-polyline stars are black; the extra polylines get their own colours
            palette: vec![
                BLACK, BLUE, PURPLE, GREEN, RED, ORANGE, MAROON, NAVY, OLIVE, YELLOW, FUCHSIA,
                GRAY, AQUA, LIME, TEAL, SILVER,
            ],
        }
    }
}

/// A nicer colour palette for the web, from <https://clrs.cc>
pub mod colors {
    use rgb::RGB8;

    const fn hex(r: u8, g: u8, b: u8) -> RGB8 {
        RGB8 { r, g, b }
    }

    pub const AQUA: RGB8 = hex(0x7f, 0xdb, 0xff);
    pub const BLUE: RGB8 = hex(0x00, 0x74, 0xd9);
    pub const LIME: RGB8 = hex(0x01, 0xff, 0x70);
    pub const NAVY: RGB8 = hex(0x00, 0x1f, 0x3f);
    pub const TEAL: RGB8 = hex(0x39, 0xcc, 0xcc);
    pub const OLIVE: RGB8 = hex(0x3d, 0x99, 0x70);
    pub const GREEN: RGB8 = hex(0x2e, 0xcc, 0x40);
    pub const RED: RGB8 = hex(0xff, 0x41, 0x36);
    pub const MAROON: RGB8 = hex(0x85, 0x14, 0x4b);
    pub const ORANGE: RGB8 = hex(0xff, 0x85, 0x1b);
    pub const PURPLE: RGB8 = hex(0xb1, 0x0d, 0xc9);
    pub const YELLOW: RGB8 = hex(0xff, 0xdc, 0x00);
    pub const FUCHSIA: RGB8 = hex(0xf0, 0x12, 0xbe);
    pub const GRAY: RGB8 = hex(0xaa, 0xaa, 0xaa);
    pub const WHITE: RGB8 = hex(0xff, 0xff, 0xff);
    pub const BLACK: RGB8 = hex(0x11, 0x11, 0x11);
    pub const SILVER: RGB8 = hex(0xdd, 0xdd, 0xdd);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Steps, V2Ext};

    #[test]
    fn one_polygon_per_polyline() {
        let star = Star::new(6, Steps::single(2));
        let svg = gen_star_elem(&star, V2::ZERO, &RenderingOpts::default()).to_string();
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains(&format!("stroke=\"{}\"", colors::BLACK)));
        assert!(svg.contains(&format!("stroke=\"{}\"", colors::BLUE)));
        assert!(svg.contains("2</text>"));
    }

    #[test]
    fn palette_wraps_round() {
        let opts = RenderingOpts::default();
        assert_eq!(opts.poly_color(0), colors::BLACK);
        assert_eq!(opts.poly_color(opts.palette.len() + 1), colors::BLUE);
        let no_palette = RenderingOpts {
            palette: vec![],
            ..RenderingOpts::default()
        };
        assert_eq!(no_palette.poly_color(3), colors::BLACK);
    }

    #[test]
    fn canvas_fits_the_widest_row() {
        let catalogue = vec![
            (3, vec![Star::new(3, Steps::single(1))]),
            (
                5,
                vec![Star::new(5, Steps::single(1)), Star::new(5, Steps::single(2))],
            ),
        ];
        let svg = gen_svg_string(&catalogue, &RenderingOpts::default());
        assert!(svg.contains("width=\"160\""));
        assert!(svg.contains("height=\"160\""));
        assert_eq!(svg.matches("<g").count(), 3);
    }
}
