//! Falling heart confetti state.
//!
//! The field owns a fixed set of particles created once at spawn. Particles
//! that fall past the bottom edge are recycled in place (moved back above the
//! top) so a step never allocates.

use rand::Rng;

use crate::config::RECYCLE_Y;

/// One heart glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// px / frame, always downward
    pub speed_y: f64,
    /// px / frame, slight drift either way
    pub speed_x: f64,
    /// Index into the card palette.
    pub color: usize,
    /// Degrees.
    pub rotation: f64,
    /// Degrees / frame.
    pub rotation_speed: f64,
}

impl Particle {
    /// Randomize a particle somewhere in the band one surface-height above the
    /// visible area.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, palette_len: usize) -> Self {
        Self {
            x: rng.r#gen::<f64>() * width,
            y: rng.r#gen::<f64>() * height - height,
            size: rng.r#gen::<f64>() * 10.0 + 5.0,
            speed_y: rng.r#gen::<f64>() * 3.0 + 2.0,
            speed_x: (rng.r#gen::<f64>() - 0.5) * 2.0,
            color: if palette_len == 0 { 0 } else { rng.gen_range(0..palette_len) },
            rotation: rng.r#gen::<f64>() * 360.0,
            rotation_speed: (rng.r#gen::<f64>() - 0.5) * 10.0,
        }
    }

    fn advance(&mut self) {
        self.y += self.speed_y;
        self.x += self.speed_x;
        self.rotation += self.rotation_speed;
    }

    /// Reset position fields to just above the top edge at a random x.
    pub fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64) {
        self.y = RECYCLE_Y;
        self.x = rng.r#gen::<f64>() * width;
    }

    pub fn rotation_radians(&self) -> f64 {
        self.rotation.to_radians()
    }
}

/// Fixed-size particle set plus the surface it falls across.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        width: f64,
        height: f64,
        palette_len: usize,
    ) -> Self {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(rng, width, height, palette_len));
        }
        Self {
            particles,
            width,
            height,
        }
    }

    /// Advance every particle by one frame, recycling the ones that left the
    /// bottom of the surface. Returns how many were recycled.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut recycled = 0;
        for p in self.particles.iter_mut() {
            p.advance();
            if p.y > self.height {
                p.recycle(rng, self.width);
                recycled += 1;
            }
        }
        recycled
    }

    /// Track a new surface size. Existing positions are left as they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

/// Cubic Bézier segment: two control points and an end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: (f64, f64),
    pub c2: (f64, f64),
    pub to: (f64, f64),
}

/// Heart outline centred on the origin: start point and the two curves that
/// close it.
pub fn heart_path(size: f64) -> ((f64, f64), [CubicSegment; 2]) {
    let half = size / 2.0;
    let quarter = size / 4.0;
    let start = (0.0, quarter);
    let left = CubicSegment {
        c1: (-half, -quarter),
        c2: (-half, -half),
        to: (0.0, -half),
    };
    let right = CubicSegment {
        c1: (half, -half),
        c2: (half, -quarter),
        to: (0.0, quarter),
    };
    (start, [left, right])
}
