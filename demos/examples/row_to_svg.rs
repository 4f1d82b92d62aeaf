// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating rows as SVG.
//!
//! Render the same 3.6 rating with a few style stacks and print each row as
//! an SVG document, or write them into a directory when one is given.
//!
//! Run:
//! - `cargo run -p star_rating_demos --example row_to_svg`
//! - `cargo run -p star_rating_demos --example row_to_svg -- target/star_rows`

use std::path::PathBuf;

use kurbo::Size;
use peniko::Color;
use star_rating::Rating;
use star_rating::style::{
    BorderedStyle, HalfSymbolStyle, PartialFillStyle, StyleStack, SymbolStyle,
};

const STAR: Size = Size::new(32.0, 32.0);
const ROW_WIDTH: f64 = 200.0;

fn main() {
    let out_dir = std::env::args().nth(1).map(PathBuf::from);
    if let Some(dir) = &out_dir
        && let Err(err) = std::fs::create_dir_all(dir)
    {
        eprintln!("cannot create {}: {err}", dir.display());
        return;
    }

    let gold = Color::from_rgb8(0xff, 0xa5, 0x00);
    let ink = Color::from_rgb8(0x33, 0x33, 0x33);
    let rows = [
        ("symbols", StyleStack::new()),
        ("half_symbols", StyleStack::new().with(HalfSymbolStyle::default())),
        (
            "partial_fill",
            StyleStack::new().with(PartialFillStyle::new(ink, gold)),
        ),
        (
            "bordered_circles",
            StyleStack::new()
                .with(SymbolStyle::circle())
                .with(BorderedStyle::new(Color::from_rgb8(0xd0, 0x30, 0x30), 3.0)),
        ),
    ];

    for (name, styles) in rows {
        let mut rating = match Rating::builder().styles(styles).value(3.6).build() {
            Ok(rating) => rating,
            Err(err) => {
                eprintln!("{name}: {err}");
                continue;
            }
        };
        rating.measure(STAR, ROW_WIDTH);

        let svg = star_rating_svg::row_to_svg(&rating.render(), Size::new(ROW_WIDTH, STAR.height));
        match &out_dir {
            Some(dir) => {
                let path = dir.join(format!("{name}.svg"));
                match std::fs::write(&path, svg) {
                    Ok(()) => println!("wrote {}", path.display()),
                    Err(err) => eprintln!("cannot write {}: {err}", path.display()),
                }
            }
            None => println!("<!-- {name} -->\n{svg}\n"),
        }
    }
}
