// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handling, explained.
//!
//! Drive a rating through a drag, a cancelled drag, and an event that
//! arrives before layout, printing what the interaction trace recorded.
//!
//! Run:
//! - `cargo run -p star_rating_demos --example drag_trace`

use kurbo::{Point, Size};
use star_rating::Rating;
use star_rating::interaction::trace::{TraceEvent, TraceRecorder};

fn print_events(title: &str, trace: &TraceRecorder) {
    println!("== {title}");
    for event in trace.events() {
        match event {
            TraceEvent::Located { x, location } => println!("  x = {x:>6.1}  -> {location:?}"),
            TraceEvent::Committed { previous, value } => {
                println!("  value {previous} -> {value}");
            }
            TraceEvent::Ignored { x, reason } => println!("  x = {x:>6.1}  ignored: {reason:?}"),
        }
    }
}

fn main() {
    let mut rating = match Rating::builder().precision(0.5).value(2.0).build() {
        Ok(rating) => rating,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };
    let mut trace = TraceRecorder::new();

    // The host has not measured anything yet.
    rating.pointer_down_traced(Point::new(40.0, 10.0), &mut trace);
    rating.pointer_cancel();
    print_events("before layout", &trace);
    trace.clear();

    // Five 20px stars in a 140px row: 10px gaps.
    rating.measure(Size::new(20.0, 20.0), 140.0);

    rating.pointer_down_traced(Point::new(3.0, 10.0), &mut trace);
    for x in [18.0, 26.0, 47.0, 95.0, 180.0] {
        rating.pointer_drag_traced(Point::new(x, 10.0), &mut trace);
    }
    rating.pointer_up();
    print_events("drag to the end", &trace);
    println!("  final value: {}", rating.value());
    trace.clear();

    rating.pointer_down_traced(Point::new(-15.0, 10.0), &mut trace);
    rating.pointer_drag_traced(Point::new(64.0, 10.0), &mut trace);
    let restored = rating.pointer_cancel();
    print_events("cancelled drag", &trace);
    println!("  restored value: {restored}");
}
