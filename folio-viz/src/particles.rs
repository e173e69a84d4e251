//! Ambient particle field for the page background.
//!
//! A fixed population of drifting dots, connected by lines when they pass
//! close to each other. The simulation state is pure Rust so it can be unit
//! tested natively; drawing happens in the canvas layer.

use rand::Rng;

/// A single drifting dot.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Position in canvas pixels.
    pub x: f32,
    pub y: f32,
    /// Velocity in pixels per frame.
    pub vx: f32,
    pub vy: f32,
    /// Render diameter in pixels.
    pub size: f32,
}

/// Tuning constants for the particle field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Population size; fixed after setup, no particle is added or removed.
    pub count: usize,
    /// Velocity components are drawn uniformly from [-max_speed, max_speed].
    pub max_speed: f32,
    /// Diameter range in pixels.
    pub min_size: f32,
    pub max_size: f32,
    /// Pairs closer than this are joined by a line each frame.
    pub link_distance: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 1.0,
            min_size: 2.0,
            max_size: 6.0,
            link_distance: 100.0,
        }
    }
}

/// The particle field simulation.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub config: FieldConfig,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Populate a field with uniformly random positions, velocities and sizes.
    pub fn new(width: f32, height: f32, config: FieldConfig, rng: &mut impl Rng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                vx: rng.random_range(-config.max_speed..config.max_speed),
                vy: rng.random_range(-config.max_speed..config.max_speed),
                size: rng.random_range(config.min_size..config.max_size),
            })
            .collect();

        Self {
            particles,
            config,
            width,
            height,
        }
    }

    /// Current simulation bounds in pixels.
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance every particle by one frame and reflect at the bounds.
    ///
    /// Reflection flips the velocity sign only; the position is not clamped,
    /// so a particle can render up to one frame's travel outside the bounds
    /// in the frame it reflects.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    /// Update the bounds after a viewport resize.
    ///
    /// Positions are left as they are; particles outside the new bounds drift
    /// back in through the normal reflection rule.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Unordered index pairs of particles within link distance of each other.
    ///
    /// O(N²) over the population, acceptable because the population is small
    /// and fixed.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let limit_sq = self.config.link_distance * self.config.link_distance;
        let mut pairs = Vec::new();

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dx = self.particles[j].x - self.particles[i].x;
                let dy = self.particles[j].y - self.particles[i].y;
                if dx * dx + dy * dy < limit_sq {
                    pairs.push((i, j));
                }
            }
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn test_rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn populates_fixed_count_inside_bounds() {
        let field = ParticleField::new(1000.0, 800.0, FieldConfig::default(), &mut test_rng());

        assert_eq!(field.particles.len(), 50);
        for p in &field.particles {
            assert!((0.0..=1000.0).contains(&p.x));
            assert!((0.0..=800.0).contains(&p.y));
            assert!((-1.0..=1.0).contains(&p.vx));
            assert!((-1.0..=1.0).contains(&p.vy));
            assert!((2.0..=6.0).contains(&p.size));
        }
    }

    #[test]
    fn step_advances_by_velocity() {
        let mut field = ParticleField::new(1000.0, 800.0, FieldConfig::default(), &mut test_rng());
        field.particles = vec![Particle {
            x: 100.0,
            y: 200.0,
            vx: 0.5,
            vy: -0.25,
            size: 4.0,
        }];

        field.step();

        assert_eq!(field.particles[0].x, 100.5);
        assert_eq!(field.particles[0].y, 199.75);
    }

    #[test]
    fn velocity_flips_exactly_on_boundary_crossing() {
        let mut field = ParticleField::new(100.0, 100.0, FieldConfig::default(), &mut test_rng());
        field.particles = vec![
            // Crosses the right edge this frame.
            Particle {
                x: 99.8,
                y: 50.0,
                vx: 0.9,
                vy: 0.0,
                size: 3.0,
            },
            // Stays comfortably inside; must not flip.
            Particle {
                x: 50.0,
                y: 50.0,
                vx: 0.9,
                vy: 0.9,
                size: 3.0,
            },
            // Crosses the top edge this frame.
            Particle {
                x: 50.0,
                y: 0.1,
                vx: 0.0,
                vy: -0.6,
                size: 3.0,
            },
        ];

        field.step();

        assert_eq!(field.particles[0].vx, -0.9);
        assert_eq!(field.particles[1].vx, 0.9);
        assert_eq!(field.particles[1].vy, 0.9);
        assert_eq!(field.particles[2].vy, 0.6);
    }

    #[test]
    fn reflection_allows_at_most_one_frame_of_overshoot() {
        let mut field = ParticleField::new(640.0, 480.0, FieldConfig::default(), &mut test_rng());
        let overshoot = field.config.max_speed;

        for _ in 0..5_000 {
            field.step();
            for p in &field.particles {
                assert!(p.x >= -overshoot && p.x <= 640.0 + overshoot, "x = {}", p.x);
                assert!(p.y >= -overshoot && p.y <= 480.0 + overshoot, "y = {}", p.y);
            }
        }
    }

    #[test]
    fn resize_keeps_positions() {
        let mut field = ParticleField::new(1000.0, 800.0, FieldConfig::default(), &mut test_rng());
        let before: Vec<(f32, f32)> = field.particles.iter().map(|p| (p.x, p.y)).collect();

        field.resize(500.0, 400.0);

        let after: Vec<(f32, f32)> = field.particles.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
        assert_eq!(field.bounds(), (500.0, 400.0));
    }

    #[test]
    fn links_pair_only_nearby_particles() {
        let mut field = ParticleField::new(1000.0, 800.0, FieldConfig::default(), &mut test_rng());
        let at = |x: f32, y: f32| Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 3.0,
        };
        field.particles = vec![at(0.0, 0.0), at(60.0, 0.0), at(500.0, 500.0)];

        assert_eq!(field.links(), vec![(0, 1)]);
    }

    #[test]
    fn links_threshold_is_exclusive() {
        let mut field = ParticleField::new(1000.0, 800.0, FieldConfig::default(), &mut test_rng());
        let at = |x: f32| Particle {
            x,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            size: 3.0,
        };
        field.particles = vec![at(0.0), at(100.0)];
        assert!(field.links().is_empty());

        field.particles = vec![at(0.0), at(99.9)];
        assert_eq!(field.links().len(), 1);
    }
}
