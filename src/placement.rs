//! Random placement for the evasive "No" button.
//!
//! All coordinates are relative to the common page container. The button may
//! land anywhere inside the boundary region (inset by a padding) as long as it
//! also stays fully inside the container. When no such spot exists the button
//! simply stays where it is.

use rand::Rng;

/// Axis-aligned rectangle in layout coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Region {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Translate a viewport rectangle into coordinates relative to `origin`
    /// (the container's top-left corner in the viewport).
    pub fn relative_to(&self, origin: Position) -> Self {
        Self {
            left: self.left - origin.x,
            top: self.top - origin.y,
            right: self.right - origin.x,
            bottom: self.bottom - origin.y,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Measured width / height of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of a placed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed range of legal top-left corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlacementRange {
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Everything measured at trigger time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementInput {
    pub region: Region,
    pub element: ElementSize,
    pub container: ElementSize,
    pub padding: f64,
}

impl PlacementInput {
    /// Legal range for the element's top-left corner, or `None` if the element
    /// cannot fit.
    pub fn range(&self) -> Option<PlacementRange> {
        let min_x = (self.region.left + self.padding).max(0.0);
        let min_y = (self.region.top + self.padding).max(0.0);
        let max_x = (self.region.right - self.element.width - self.padding)
            .min(self.container.width - self.element.width);
        let max_y = (self.region.bottom - self.element.height - self.padding)
            .min(self.container.height - self.element.height);

        // NaN measurements fail both comparisons, so test for the valid case.
        if max_x >= min_x && max_y >= min_y {
            Some(PlacementRange {
                min_x,
                max_x,
                min_y,
                max_y,
            })
        } else {
            None
        }
    }
}

/// Pick a new random position for the evasive element.
///
/// Each axis is drawn independently and uniformly from its range. Returns
/// `None` (leave the element where it is) when the range is degenerate.
pub fn place_evasive<R: Rng + ?Sized>(input: &PlacementInput, rng: &mut R) -> Option<Position> {
    let range = input.range()?;
    // min() guards against rounding past the upper bound.
    let x = (range.min_x + rng.r#gen::<f64>() * (range.max_x - range.min_x)).min(range.max_x);
    let y = (range.min_y + rng.r#gen::<f64>() * (range.max_y - range.min_y)).min(range.max_y);
    Some(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn portrait_input() -> PlacementInput {
        PlacementInput {
            region: Region::new(0.0, 0.0, 300.0, 500.0),
            element: ElementSize::new(80.0, 40.0),
            container: ElementSize::new(300.0, 500.0),
            padding: 16.0,
        }
    }

    #[test]
    fn test_range_for_portrait_boundary() {
        let range = portrait_input().range().unwrap();
        assert_eq!(range.min_x, 16.0);
        assert_eq!(range.max_x, 204.0);
        assert_eq!(range.min_y, 16.0);
        assert_eq!(range.max_y, 444.0);
    }

    #[test]
    fn test_small_region_is_noop() {
        let input = PlacementInput {
            region: Region::new(0.0, 0.0, 40.0, 40.0),
            ..portrait_input()
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert!(input.range().is_none());
        assert_eq!(place_evasive(&input, &mut rng), None);
    }

    #[test]
    fn test_clamps_to_small_container() {
        // Boundary wider than the visible container: container wins.
        let input = PlacementInput {
            region: Region::new(-100.0, -50.0, 600.0, 900.0),
            element: ElementSize::new(80.0, 40.0),
            container: ElementSize::new(320.0, 480.0),
            padding: 16.0,
        };
        let range = input.range().unwrap();
        assert_eq!(range.min_x, 0.0);
        assert_eq!(range.min_y, 0.0);
        assert_eq!(range.max_x, 240.0);
        assert_eq!(range.max_y, 440.0);
    }

    #[test]
    fn test_exact_fit_yields_single_point() {
        let input = PlacementInput {
            region: Region::new(0.0, 0.0, 112.0, 72.0),
            ..portrait_input()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(place_evasive(&input, &mut rng), Some(Position::new(16.0, 16.0)));
    }

    #[test]
    fn test_nan_measurement_is_noop() {
        let input = PlacementInput {
            element: ElementSize::new(f64::NAN, 40.0),
            ..portrait_input()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(place_evasive(&input, &mut rng), None);
    }

    #[test]
    fn test_positions_vary() {
        let input = portrait_input();
        let mut rng = StdRng::seed_from_u64(42);
        let a = place_evasive(&input, &mut rng).unwrap();
        let b = place_evasive(&input, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_relative_to_container() {
        let boundary = Region::new(110.0, 60.0, 410.0, 560.0);
        let rel = boundary.relative_to(Position::new(100.0, 50.0));
        assert_eq!(rel, Region::new(10.0, 10.0, 310.0, 510.0));
        assert_eq!(rel.width(), 300.0);
        assert_eq!(rel.height(), 500.0);
    }

    #[test]
    fn test_thousand_trials_stay_in_bounds() {
        let input = portrait_input();
        let range = input.range().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..1000 {
            let p = place_evasive(&input, &mut rng).unwrap();
            assert!(range.contains(p), "{p:?} outside {range:?}");
            assert!(p.x + input.element.width <= input.container.width);
            assert!(p.y + input.element.height <= input.container.height);
        }
    }
}
