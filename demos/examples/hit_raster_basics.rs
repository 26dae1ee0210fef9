// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color-key hit testing over overlapping shapes.
//!
//! Three shapes are painted back to front. Queries where they overlap resolve
//! to the one painted last.
//!
//! Run:
//! - `cargo run -p understory_demos --example hit_raster_basics`

use kurbo::{Affine, Circle, Point, Rect, RoundedRect};
use rand::SeedableRng;
use rand::rngs::StdRng;
use understory_hit::{HitDraw, HitRaster, KeyRegistry, KeyedShape, LayeredRasters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(2025));
    let panel = keys.allocate("panel")?;
    let badge = keys.allocate("badge")?;
    let frame = keys.allocate("frame")?;

    let scene: Vec<Box<dyn HitDraw>> = vec![
        Box::new(KeyedShape::new(panel, Rect::new(20.0, 20.0, 180.0, 140.0))),
        Box::new(KeyedShape::new(badge, Circle::new((0.0, 0.0), 24.0)).with_transform(
            Affine::translate((170.0, 30.0)),
        )),
        Box::new({
            let mut outline =
                KeyedShape::new(frame, RoundedRect::new(5.0, 5.0, 195.0, 155.0, 8.0))
                    .with_stroke(6.0);
            outline.fill = false;
            outline
        }),
    ];

    let mut raster = HitRaster::new(200, 160)?;
    raster.redraw(&scene);

    for (label, point) in [
        ("panel interior", Point::new(60.0, 80.0)),
        ("badge over panel", Point::new(165.0, 35.0)),
        ("outline stroke", Point::new(5.0, 80.0)),
        ("gap inside outline", Point::new(12.0, 80.0)),
        ("outside", Point::new(300.0, 10.0)),
    ] {
        match raster.query(&keys, point) {
            Some(hit) => println!("{label:>20}: {} (key {})", hit.shape, hit.key),
            None => println!("{label:>20}: nothing"),
        }
    }

    println!(
        "badge alone covers (165, 35): {}",
        raster.point_in_shape(&scene[1], Point::new(165.0, 35.0))
    );

    // A second layer stacked on top shadows everything below it.
    let tooltip = keys.allocate("tooltip")?;
    let mut stack = LayeredRasters::new();
    let base = stack.push_layer(200, 160)?;
    let overlay = stack.push_layer(200, 160)?;
    if let Some(layer) = stack.layer_mut(base) {
        layer.redraw(&scene);
    }
    if let Some(layer) = stack.layer_mut(overlay) {
        layer.redraw(&KeyedShape::new(tooltip, Rect::new(50.0, 60.0, 120.0, 90.0)));
    }
    if let Some((layer, hit)) = stack.query(&keys, Point::new(60.0, 80.0)) {
        println!("layered query at (60, 80): {} on layer {layer}", hit.shape);
    }

    // `point_in_shape` repainted the raster with the badge alone.
    raster.redraw(&scene);

    // Releasing a key makes its pixels resolve to nothing.
    keys.release(badge);
    println!(
        "after release, badge pixel resolves to {:?}",
        raster.query(&keys, Point::new(165.0, 35.0)).map(|h| h.shape)
    );
    Ok(())
}
