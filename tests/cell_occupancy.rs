//! Rasterized placement checks.
//!
//! Every placement is painted into a buffer where each pixel remembers which
//! item owns it. Overlaps, cells leaking past the container, and items in
//! the spacing gutters all show up as owner conflicts or stray pixels.
//!
//! "Single" mode = ask the engine for one placement at a time, the way a
//! host places cells lazily as they scroll in.
//!
//! "Batch" mode = `place_all` from one cache fill.
//!
//! Both must agree exactly.

use zengrid::*;

/// A pixel buffer tracking which item covers each pixel.
struct Canvas {
    width: u32,
    height: u32,
    owners: Vec<Option<u64>>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            owners: vec![None; (width * height) as usize],
        }
    }

    fn get(&self, x: u32, y: u32) -> Option<u64> {
        assert!(
            x < self.width && y < self.height,
            "({x},{y}) out of bounds {}x{}",
            self.width,
            self.height
        );
        self.owners[(y * self.width + x) as usize]
    }

    /// Paint a placement. Coordinates must be whole pixels.
    fn paint(&mut self, index: u64, p: Placement) -> Result<(), String> {
        let (x0, y0) = (p.origin.x as u32, p.origin.y as u32);
        let (x1, y1) = (p.max_x() as u32, p.max_y() as u32);
        if x1 > self.width || y1 > self.height {
            return Err(format!("item {index} at {p:?} leaves the {}x{} canvas", self.width, self.height));
        }
        for y in y0..y1 {
            for x in x0..x1 {
                let slot = &mut self.owners[(y * self.width + x) as usize];
                if let Some(other) = *slot {
                    return Err(format!("item {index} overlaps item {other} at ({x},{y})"));
                }
                *slot = Some(index);
            }
        }
        Ok(())
    }

    fn row_is_empty(&self, y: u32) -> bool {
        (0..self.width).all(|x| self.get(x, y).is_none())
    }
}

fn phone_grid() -> GridLayoutEngine {
    GridLayoutEngine::new(AspectRatio::new(120.0, 214.0).unwrap(), 3.0, 2, 3).unwrap()
}

#[test]
fn no_overlaps_and_gutters_stay_empty() {
    let mut engine = phone_grid();
    let count = 50;
    let height = engine.measure(363.0, count);
    assert_eq!(height.fract(), 0.0);

    let mut canvas = Canvas::new(363, height as u32);
    let placements: Vec<_> = engine.place_all(363.0, count).collect();
    for (i, p) in placements {
        canvas.paint(i, p).unwrap();
    }

    // First line 0..321, gutter 321..324, second line 324..537, gutter 537..540.
    assert_eq!(canvas.get(0, 0), Some(0));
    assert_eq!(canvas.get(362, 320), Some(1));
    for y in 321..324 {
        assert!(canvas.row_is_empty(y), "row {y} should be gutter");
    }
    assert_eq!(canvas.get(0, 324), Some(2));
    assert_eq!(canvas.get(118, 324), Some(2));
    assert_eq!(canvas.get(119, 324), None);
    assert_eq!(canvas.get(121, 324), None);
    assert_eq!(canvas.get(122, 324), Some(3));
    assert_eq!(canvas.get(362, 536), Some(4));
    for y in 537..540 {
        assert!(canvas.row_is_empty(y), "row {y} should be gutter");
    }

    // The bottom row belongs to the last line.
    let last_row = canvas.height - 1;
    assert!(!canvas.row_is_empty(last_row));
}

#[test]
fn every_pixel_of_a_full_line_is_covered_except_gutters() {
    let mut engine = GridLayoutEngine::new(AspectRatio::SQUARE, 2.0, 1, 4).unwrap();
    // width 398: first line 398 wide, later items (398 - 6) / 4 = 98 wide.
    let count = 1 + 4 * 3;
    let height = engine.measure(398.0, count);
    assert_eq!(height, 398.0 + 3.0 * (2.0 + 98.0));

    let mut canvas = Canvas::new(398, height as u32);
    let placements: Vec<_> = engine.place_all(398.0, count).collect();
    for (i, p) in placements {
        canvas.paint(i, p).unwrap();
    }

    let covered = canvas.owners.iter().filter(|o| o.is_some()).count() as f64;
    let expected = 398.0 * 398.0 + 12.0 * 98.0 * 98.0;
    assert_eq!(covered, expected);
}

#[test]
fn single_and_batch_placement_agree() {
    let configs = [
        ((120.0, 214.0), 2, 3, 3.0),
        ((1.0, 1.0), 1, 1, 0.0),
        ((4.0, 3.0), 3, 5, 1.5),
        ((9.0, 16.0), 1, 6, 0.25),
    ];
    let widths = [320.0, 363.0, 375.5, 820.0];

    let mut failures = Vec::new();
    for &((rw, rh), first, next, spacing) in &configs {
        for &w in &widths {
            let ratio = AspectRatio::new(rw, rh).unwrap();
            let mut single = GridLayoutEngine::new(ratio, spacing, first, next).unwrap();
            let mut batch = GridLayoutEngine::new(ratio, spacing, first, next).unwrap();
            let batch_placements: Vec<_> = batch.place_all(w, 300).collect();
            for (i, p) in batch_placements {
                let q = single.place(i as i64, w).unwrap();
                if p != q {
                    failures.push(format!(
                        "{rw}:{rh} {first}/{next} s={spacing} w={w} item {i}: batch {p:?} vs single {q:?}"
                    ));
                }
            }
        }
    }
    assert!(
        failures.is_empty(),
        "{} mismatches:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn container_origin_is_added_by_caller() {
    let mut engine = phone_grid();
    let bounds_origin = (4.0, 100.0);
    let p = engine
        .place(3, 363.0)
        .unwrap()
        .translate(bounds_origin.0, bounds_origin.1);
    assert_eq!(p.origin, Point::new(126.0, 424.0));
}
