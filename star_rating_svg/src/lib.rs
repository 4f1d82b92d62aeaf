// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=star_rating_svg --heading-base-level=0

//! SVG export of rendered star-rating rows.
//!
//! [`row_to_svg`] turns the output of [`Rating::render`](star_rating::Rating::render)
//! into a standalone SVG document. It is meant for debugging and demos, not
//! as a production renderer:
//! - Glyphs are drawn from the star outline (for `star`) or a circle (for
//!   `circle`); other symbol names become labelled placeholder squares.
//! - Partial-fill stars become a clipped inner path plus an even-odd rim.
//! - Framed content is drawn in its recorded content bounds, with a stroked
//!   outline around the cell.
//! - Only solid brushes are supported; other brushes fall back to black.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use star_rating::Rating;
//!
//! let mut rating = Rating::builder().spacing(4.0).value(2.0).build().unwrap();
//! rating.set_star_size(Size::new(16.0, 16.0));
//!
//! let svg = star_rating_svg::row_to_svg(&rating.render(), Size::new(96.0, 16.0));
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<path").count(), 5);
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{BezPath, PathEl, Rect, Size};
use peniko::{Brush, Color, Fill};
use star_rating::CellDrawable;
use star_rating::shape::{FilledRegion, horizontal_clip, outer_star};
use star_rating::style::{Drawable, Glyph, GlyphFill, Symbol};

/// Paint used for glyph cells, which carry no colors of their own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgTheme {
    /// Fill and outline color of glyphs.
    pub glyph: Color,
    /// Width of glyph outlines and frames.
    pub stroke_width: f64,
}

impl Default for SvgTheme {
    fn default() -> Self {
        Self {
            glyph: Color::from_rgb8(0xff, 0xa5, 0x00),
            stroke_width: 1.0,
        }
    }
}

/// Writes `cells` as an SVG document of the given `size`, with the default
/// [`SvgTheme`].
#[must_use]
pub fn row_to_svg(cells: &[CellDrawable], size: Size) -> String {
    row_to_svg_with(cells, size, &SvgTheme::default())
}

/// Writes `cells` as an SVG document of the given `size`.
#[must_use]
pub fn row_to_svg_with(cells: &[CellDrawable], size: Size, theme: &SvgTheme) -> String {
    let mut writer = SvgWriter {
        theme,
        defs: String::new(),
        body: String::new(),
        clip_counter: 0,
    };
    for cell in cells {
        let _ = write!(writer.body, "<g data-index=\"{}\">", cell.index);
        writer.drawable(&cell.drawable, cell.rect);
        writer.body.push_str("</g>");
    }

    let (w, h) = (fmt_num(size.width), fmt_num(size.height));
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    if !writer.defs.is_empty() {
        svg.push_str("<defs>");
        svg.push_str(&writer.defs);
        svg.push_str("</defs>");
    }
    svg.push_str(&writer.body);
    svg.push_str("</svg>");
    svg
}

#[derive(Copy, Clone)]
enum PaintKind {
    Fill,
    Stroke,
}

struct SvgWriter<'a> {
    theme: &'a SvgTheme,
    defs: String,
    body: String,
    clip_counter: u32,
}

impl SvgWriter<'_> {
    fn drawable(&mut self, drawable: &Drawable, rect: Rect) {
        match drawable {
            Drawable::Glyph(glyph) => self.glyph(glyph, rect),
            Drawable::PartialFillStar(star) => {
                for region in star.regions() {
                    self.region(region);
                }
            }
            Drawable::Framed {
                content,
                border,
                content_bounds,
                ..
            } => {
                self.drawable(content, *content_bounds);
                let frame = rect_element(rect, &stroke_attrs(border, self.theme.stroke_width));
                self.body.push_str(&frame);
            }
            Drawable::Custom(regions) => {
                for region in regions {
                    self.region(region);
                }
            }
        }
    }

    fn glyph(&mut self, glyph: &Glyph, rect: Rect) {
        let brush = Brush::Solid(self.theme.glyph);
        let stroke = stroke_attrs(&brush, self.theme.stroke_width);
        let fill = paint_attrs(PaintKind::Fill, &brush);

        let outline = if glyph.symbol == Symbol::STAR {
            let d = bez_path_to_svg_d(&outer_star(rect));
            format!("<path d=\"{d}\"")
        } else if glyph.symbol == Symbol::CIRCLE {
            let r = 0.5 * rect.width().abs().min(rect.height().abs());
            let c = rect.center();
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
                fmt_num(c.x),
                fmt_num(c.y),
                fmt_num(r)
            )
        } else {
            let _ = write!(
                self.body,
                "<g data-symbol=\"{}\">{}</g>",
                escape_attr(glyph.symbol.name()),
                rect_element(rect, &stroke)
            );
            return;
        };

        match glyph.fill {
            GlyphFill::Empty => {
                let _ = write!(self.body, "{outline}{stroke}/>");
            }
            GlyphFill::Full => {
                let _ = write!(self.body, "{outline}{fill}/>");
            }
            GlyphFill::LeadingHalf => {
                let clip = self.clip_rect(horizontal_clip(rect, 0.5));
                let _ = write!(
                    self.body,
                    "{outline}{fill} clip-path=\"url(#{clip})\"/>{outline}{stroke}/>"
                );
            }
        }
    }

    fn region(&mut self, region: &FilledRegion) {
        if region.is_clipped_out() {
            return;
        }
        let mut attrs = paint_attrs(PaintKind::Fill, &region.brush);
        let _ = write!(attrs, " fill-rule=\"{}\"", fill_rule_svg(region.fill_rule));
        if let Some(clip) = region.clip {
            let id = self.clip_rect(clip);
            let _ = write!(attrs, " clip-path=\"url(#{id})\"");
        }
        let d = bez_path_to_svg_d(&region.path);
        let _ = write!(self.body, "<path d=\"{d}\"{attrs}/>");
    }

    fn clip_rect(&mut self, rect: Rect) -> String {
        self.clip_counter += 1;
        let id = format!("clip{}", self.clip_counter);
        let _ = write!(
            self.defs,
            "<clipPath id=\"{id}\" clipPathUnits=\"userSpaceOnUse\">{}</clipPath>",
            rect_element(rect, "")
        );
        id
    }
}

fn rect_element(rect: Rect, attrs: &str) -> String {
    let rect = rect.abs();
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{attrs}/>",
        fmt_num(rect.x0),
        fmt_num(rect.y0),
        fmt_num(rect.width()),
        fmt_num(rect.height()),
    )
}

fn paint_attrs(kind: PaintKind, brush: &Brush) -> String {
    // Non-solid brushes keep the black default.
    let (rgb, alpha) = match brush {
        Brush::Solid(color) => color_to_svg(*color),
        _ => (String::from("#000000"), 1.0),
    };
    let mut out = String::new();
    match kind {
        PaintKind::Fill => {
            let _ = write!(out, " fill=\"{rgb}\" stroke=\"none\"");
            if alpha < 1.0 {
                let _ = write!(out, " fill-opacity=\"{}\"", fmt_num(alpha));
            }
        }
        PaintKind::Stroke => {
            let _ = write!(out, " fill=\"none\" stroke=\"{rgb}\"");
            if alpha < 1.0 {
                let _ = write!(out, " stroke-opacity=\"{}\"", fmt_num(alpha));
            }
        }
    }
    out
}

fn stroke_attrs(brush: &Brush, width: f64) -> String {
    let mut out = paint_attrs(PaintKind::Stroke, brush);
    let _ = write!(out, " stroke-width=\"{}\"", fmt_num(width));
    out
}

fn fill_rule_svg(rule: Fill) -> &'static str {
    match rule {
        Fill::NonZero => "nonzero",
        Fill::EvenOdd => "evenodd",
    }
}

fn color_to_svg(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let alpha = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), alpha)
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y),
                    fmt_num(p3.x),
                    fmt_num(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Formats with at most three decimals and no trailing zeros.
fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
