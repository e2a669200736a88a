use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

const CONFETTI_SYMBOLS: [char; 6] = ['*', '+', 'o', '.', '~', '^'];
const GRAVITY: f64 = 15.0;
const DURATION_SECS: f64 = 3.0;

/// What the confetti spells out, picked per burst.
const BANNERS: [&str; 3] = ["THREE THINGS!", "WONDERFUL!", "YES, AND!"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParticleKind {
    /// Falls under gravity and is culled off screen.
    Confetti,
    /// Flies to a target cell and stays, forming the banner text.
    Banner { target_x: i32, target_y: i32 },
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    vel_x: f64,
    vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    age: f64,
    max_age: f64,
    kind: ParticleKind,
}

impl Particle {
    fn confetti<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-3.0..3.0),
            vel_y: rng.gen_range(-4.0..-1.0),
            symbol: *CONFETTI_SYMBOLS.choose(rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(2.0..4.0),
            kind: ParticleKind::Confetti,
        }
    }

    fn banner<R: Rng>(target_x: i32, target_y: i32, symbol: char, rng: &mut R) -> Self {
        let x = target_x as f64 + rng.gen_range(-10.0..10.0);
        let y = target_y as f64 + rng.gen_range(-5.0..5.0);
        Self {
            x,
            y,
            vel_x: target_x as f64 - x,
            vel_y: target_y as f64 - y,
            symbol,
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(3.0..5.0),
            kind: ParticleKind::Banner { target_x, target_y },
        }
    }

    /// Returns false when the particle has aged out.
    fn step(&mut self, dt: f64) -> bool {
        match self.kind {
            ParticleKind::Banner { target_x, target_y } => {
                let dx = target_x as f64 - self.x;
                let dy = target_y as f64 - self.y;
                if (dx * dx + dy * dy).sqrt() > 1.0 {
                    self.x += self.vel_x * dt;
                    self.y += self.vel_y * dt;
                    self.vel_x *= 0.95;
                    self.vel_y *= 0.95;
                } else {
                    self.x = target_x as f64;
                    self.y = target_y as f64;
                    self.vel_x = 0.0;
                    self.vel_y = 0.0;
                }
            }
            ParticleKind::Confetti => {
                self.x += self.vel_x * dt;
                self.y += self.vel_y * dt;
                self.vel_y += GRAVITY * dt;
            }
        }
        self.age += dt;
        self.age < self.max_age
    }
}

/// Confetti burst overlay. Started by the shell when a game requests
/// `celebrate`, advanced once per tick, self-deactivating.
#[derive(Debug)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    started_at: Instant,
    pub is_active: bool,
    width: f64,
    height: f64,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            started_at: Instant::now(),
            is_active: false,
            width: 80.0,
            height: 24.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.started_at = Instant::now();
        self.is_active = true;
        self.width = width as f64;
        self.height = height as f64;

        let center_x = width as i32 / 2;
        let center_y = height as i32 / 2;

        let banner = BANNERS.choose(&mut rng).unwrap_or(&BANNERS[0]);
        let start_x = center_x - banner.len() as i32 / 2;
        for (i, ch) in banner.chars().enumerate() {
            if ch != ' ' {
                self.particles
                    .push(Particle::banner(start_x + i as i32, center_y - 2, ch, &mut rng));
            }
        }

        for _ in 0..25 {
            let x = center_x as f64 + rng.gen_range(-15.0..15.0);
            let y = center_y as f64 + rng.gen_range(-8.0..8.0);
            self.particles.push(Particle::confetti(x, y, &mut rng));
        }
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        if self.started_at.elapsed().as_secs_f64() >= DURATION_SECS {
            self.is_active = false;
            self.particles.clear();
            return;
        }

        let dt = 0.1; // fixed timestep, one animation step per tick
        let (width, height) = (self.width, self.height);
        self.particles.retain_mut(|p| {
            let alive = p.step(dt);
            match p.kind {
                ParticleKind::Banner { .. } => alive,
                ParticleKind::Confetti => {
                    let buffer = 5.0;
                    let off_screen =
                        p.y > height + buffer || p.x < -buffer || p.x > width + buffer;
                    alive && !off_screen
                }
            }
        });
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}
