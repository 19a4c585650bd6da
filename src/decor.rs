//! Floating hearts behind the question. Purely decorative; the motion itself
//! is a CSS animation, we only pick where each heart starts.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingHeart {
    /// Seconds into the animation cycle (applied as a negative delay).
    pub delay_s: f64,
    /// Horizontal offset, percent of the page width.
    pub left_pct: f64,
    /// Edge length in px.
    pub size_px: f64,
}

impl FloatingHeart {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            delay_s: rng.r#gen::<f64>() * 12.0,
            left_pct: rng.r#gen::<f64>() * 100.0,
            size_px: rng.r#gen::<f64>() * 30.0 + 15.0,
        }
    }

    /// Inline style for the heart's wrapper element.
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;width:{:.1}px;height:{:.1}px;animation-delay:-{:.2}s;",
            self.left_pct, self.size_px, self.size_px, self.delay_s
        )
    }
}

pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FloatingHeart> {
    (0..count).map(|_| FloatingHeart::random(rng)).collect()
}
