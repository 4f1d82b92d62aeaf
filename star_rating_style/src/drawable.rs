// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single result type every rating style produces.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use star_rating_shape::{FilledRegion, PartialFillStar};

/// Name of a symbol family, such as `star` or `circle`.
///
/// Hosts map symbol names (and the variant names from
/// [`Glyph::variant_name`]) onto their own glyph artwork.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    /// The five-pointed star.
    pub const STAR: Self = Self(Cow::Borrowed("star"));
    /// A circle.
    pub const CIRCLE: Self = Self(Cow::Borrowed("circle"));

    /// Creates a symbol from its family name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The family name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// How much of a glyph is filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlyphFill {
    /// Outline only.
    Empty,
    /// Left half filled.
    LeadingHalf,
    /// Completely filled.
    Full,
}

/// A symbol drawn in one of its fill variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// Symbol family.
    pub symbol: Symbol,
    /// Fill variant.
    pub fill: GlyphFill,
}

impl Glyph {
    /// Creates a glyph.
    #[must_use]
    pub fn new(symbol: Symbol, fill: GlyphFill) -> Self {
        Self { symbol, fill }
    }

    /// Conventional variant name: `star`, `star.fill` or
    /// `star.leadinghalf.filled`.
    #[must_use]
    pub fn variant_name(&self) -> String {
        let name = self.symbol.name();
        match self.fill {
            GlyphFill::Empty => String::from(name),
            GlyphFill::LeadingHalf => format!("{name}.leadinghalf.filled"),
            GlyphFill::Full => format!("{name}.fill"),
        }
    }
}

/// Drawable description of one rating cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    /// A symbol in one of its fill variants.
    Glyph(Glyph),
    /// A star filled from the left up to a fraction.
    PartialFillStar(PartialFillStar),
    /// Content from a style further down the stack, padded and outlined.
    Framed {
        /// The wrapped drawable.
        content: Box<Drawable>,
        /// Paint for the frame outline.
        border: Brush,
        /// Space between the cell edge and the content.
        padding: f64,
        /// Where `content` was laid out: the cell shrunk by `padding`.
        content_bounds: Rect,
    },
    /// Arbitrary filled regions, painted in order.
    Custom(Vec<FilledRegion>),
}

impl Drawable {
    /// Number of [`Drawable::Framed`] layers around the innermost content.
    #[must_use]
    pub fn frame_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Self::Framed { content, .. } = current {
            depth += 1;
            current = content.as_ref();
        }
        depth
    }

    /// The drawable inside all [`Drawable::Framed`] layers.
    #[must_use]
    pub fn innermost(&self) -> &Self {
        let mut current = self;
        while let Self::Framed { content, .. } = current {
            current = content.as_ref();
        }
        current
    }

    /// The glyph, if this is a [`Drawable::Glyph`].
    #[must_use]
    pub fn as_glyph(&self) -> Option<&Glyph> {
        match self {
            Self::Glyph(glyph) => Some(glyph),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn variant_names() {
        let star = |fill| Glyph::new(Symbol::STAR, fill).variant_name();
        assert_eq!(star(GlyphFill::Empty), "star");
        assert_eq!(star(GlyphFill::Full), "star.fill");
        assert_eq!(star(GlyphFill::LeadingHalf), "star.leadinghalf.filled");
        assert_eq!(
            Glyph::new(Symbol::new("heart"), GlyphFill::Full).variant_name(),
            "heart.fill"
        );
    }

    #[test]
    fn frame_depth_and_innermost() {
        let glyph = Drawable::Glyph(Glyph::new(Symbol::CIRCLE, GlyphFill::Full));
        assert_eq!(glyph.frame_depth(), 0);

        let framed = Drawable::Framed {
            content: Box::new(Drawable::Framed {
                content: Box::new(glyph.clone()),
                border: Brush::Solid(Color::BLACK),
                padding: 2.0,
                content_bounds: Rect::new(4.0, 4.0, 16.0, 16.0),
            }),
            border: Brush::Solid(Color::WHITE),
            padding: 2.0,
            content_bounds: Rect::new(2.0, 2.0, 18.0, 18.0),
        };
        assert_eq!(framed.frame_depth(), 2);
        assert_eq!(framed.innermost(), &glyph);
        assert_eq!(framed.as_glyph(), None);
        assert_eq!(
            framed.innermost().as_glyph().map(|g| g.symbol.name()),
            Some("circle")
        );
    }
}
