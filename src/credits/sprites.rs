use rand::Rng;
use tracing::trace;
use crate::constants::*;
use crate::credits::kinds::{PLAYER_COLORS, SpriteKind};
use crate::render::{Canvas, Direction, Point, SpriteDraw, SpriteSheet};

/// An ambient figure walking along the bottom of the credits screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorativeSprite {
    pub pos: Point,
    pub direction: Direction,
    pub speed: i32,
    pub frame: u8,
    pub kind: SpriteKind,
    pub color: u32,
}

impl DecorativeSprite {
    /// Advances the walk cycle by one step.
    fn step(&mut self, viewport_width: i32) {
        self.frame = (self.frame + 1) % SPRITE_FRAMES;

        // The flip does not pull the figure back inside; it walks back from where it is
        match self.direction {
            Direction::LeftToRight => {
                self.pos.x += self.speed;
                if self.pos.x > viewport_width {
                    self.direction = Direction::RightToLeft;
                }
            }
            Direction::RightToLeft => {
                self.pos.x -= self.speed;
                if self.pos.x < 0 {
                    self.direction = Direction::LeftToRight;
                }
            }
        }
    }

    pub fn draw_call(&self) -> SpriteDraw {
        let (sheet, id) = match self.kind {
            SpriteKind::Worker { sprite } => (SpriteSheet::Jobs, sprite),
            SpriteKind::Carrier { ware } => (SpriteSheet::Carrier, ware),
        };
        SpriteDraw {
            sheet,
            id,
            direction: self.direction,
            fat: false,
            frame: self.frame,
            pos: self.pos,
            color: self.color,
        }
    }
}

/// Spawns per second at a measured frame rate. Slow machines get no sprites.
pub fn spawn_rate(fps: u32) -> u64 {
    if fps < 30 {
        0
    } else if fps < 60 {
        1
    } else if fps < 200 {
        2
    } else {
        5
    }
}

/// Most sprites alive at once for a viewport this wide.
pub fn capacity(viewport_width: i32) -> usize {
    SPRITE_BASE_CAPACITY + (viewport_width.max(0) / 2) as usize
}

/// Walking figures of the credits screen. Sprites are never removed; the
/// pool stops growing at [`capacity`].
pub struct SpritePool {
    sprites: Vec<DecorativeSprite>,
    anchor_y: i32,
    last_spawn: u64,
    last_step: u64,
}

impl SpritePool {
    /// `anchor_y` is the top of the UI element the figures walk above.
    pub fn new(anchor_y: i32, now: u64) -> Self {
        Self {
            sprites: Vec::new(),
            anchor_y,
            last_spawn: now,
            last_step: now,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    #[cfg(test)]
    pub fn sprites(&self) -> &[DecorativeSprite] {
        &self.sprites
    }

    /// Restarts both timers, used when the screen becomes active.
    pub fn reset_timers(&mut self, now: u64) {
        self.last_spawn = now;
        self.last_step = now;
    }

    /// Adds one sprite if the frame rate, the spawn interval and the
    /// population allow it.
    pub fn try_spawn<R: Rng>(&mut self, now: u64, viewport_width: i32, fps: u32, rng: &mut R) -> bool {
        let rate = spawn_rate(fps);
        if rate == 0
            || now.saturating_sub(self.last_spawn) <= 1000 / rate
            || self.sprites.len() >= capacity(viewport_width)
        {
            return false;
        }
        self.last_spawn = now;

        let speed = rng.random_range(1..=4);
        let (x, direction) = if rng.random_bool(0.5) {
            (0, Direction::LeftToRight)
        } else {
            (viewport_width, Direction::RightToLeft)
        };
        let color = PLAYER_COLORS[rng.random_range(0..PLAYER_COLORS.len())];
        let kind = SpriteKind::random(rng);
        let y = self.anchor_y - SPRITE_BAND_GAP - rng.random_range(0..SPRITE_BAND_HEIGHT);

        trace!("Spawned {:?} at ({}, {}) going {:?}", kind, x, y, direction);
        self.sprites.push(DecorativeSprite {
            pos: Point::new(x, y),
            direction,
            speed,
            frame: 0,
            kind,
            color,
        });
        true
    }

    /// Moves every sprite one step once the animation interval has passed.
    pub fn tick(&mut self, now: u64, viewport_width: i32) -> bool {
        if now.saturating_sub(self.last_step) <= 1000 / SPRITE_STEPS_PER_SEC {
            return false;
        }
        self.last_step = now;

        for sprite in &mut self.sprites {
            sprite.step(viewport_width);
        }
        true
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for sprite in &self.sprites {
            canvas.draw_sprite(&sprite.draw_call());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingCanvas;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ANCHOR: i32 = 550;

    fn walker(x: i32, direction: Direction, speed: i32) -> DecorativeSprite {
        DecorativeSprite {
            pos: Point::new(x, 500),
            direction,
            speed,
            frame: 0,
            kind: SpriteKind::Worker { sprite: 0 },
            color: PLAYER_COLORS[0],
        }
    }

    /// Spawns once per simulated frame for `seconds` and counts successes.
    fn spawns_over(seconds: u64, fps: u32, width: i32) -> usize {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = SpritePool::new(ANCHOR, 0);
        let frame_ms = 1000 / u64::from(fps.max(1));
        let mut spawned = 0;
        let mut now = 0;
        while now <= seconds * 1000 {
            if pool.try_spawn(now, width, fps, &mut rng) {
                spawned += 1;
            }
            now += frame_ms;
        }
        spawned
    }

    #[test]
    fn rate_ladder() {
        assert_eq!(spawn_rate(0), 0);
        assert_eq!(spawn_rate(25), 0);
        assert_eq!(spawn_rate(29), 0);
        assert_eq!(spawn_rate(30), 1);
        assert_eq!(spawn_rate(45), 1);
        assert_eq!(spawn_rate(59), 1);
        assert_eq!(spawn_rate(60), 2);
        assert_eq!(spawn_rate(100), 2);
        assert_eq!(spawn_rate(199), 2);
        assert_eq!(spawn_rate(200), 5);
    }

    #[test]
    fn slow_frame_rate_never_spawns() {
        assert_eq!(spawns_over(10, 25, 800), 0);
    }

    #[test]
    fn spawns_stay_under_the_rate() {
        assert!(spawns_over(10, 45, 800) <= 10);
        assert!(spawns_over(10, 100, 800) <= 20);
        assert!(spawns_over(10, 100, 800) >= 15);
    }

    #[test]
    fn spawn_waits_for_the_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = SpritePool::new(ANCHOR, 0);
        assert!(!pool.try_spawn(500, 800, 100, &mut rng));
        assert!(pool.try_spawn(501, 800, 100, &mut rng));
        assert!(!pool.try_spawn(1001, 800, 100, &mut rng));
        assert!(pool.try_spawn(1002, 800, 100, &mut rng));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn spawned_sprites_start_on_an_edge_in_the_band() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = SpritePool::new(ANCHOR, 0);
        for i in 1..=200 {
            pool.try_spawn(i * 1000, 800, 60, &mut rng);
        }
        assert_eq!(pool.len(), 200);

        for sprite in pool.sprites() {
            match sprite.direction {
                Direction::LeftToRight => assert_eq!(sprite.pos.x, 0),
                Direction::RightToLeft => assert_eq!(sprite.pos.x, 800),
            }
            assert!((1..=4).contains(&sprite.speed));
            assert_eq!(sprite.frame, 0);
            assert!(sprite.pos.y <= ANCHOR - 20 && sprite.pos.y > ANCHOR - 20 - 150);
            assert!(PLAYER_COLORS.contains(&sprite.color));
        }
        assert!(pool.sprites().iter().any(|s| s.direction == Direction::LeftToRight));
        assert!(pool.sprites().iter().any(|s| s.direction == Direction::RightToLeft));
    }

    #[test]
    fn population_is_capped_by_viewport_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = SpritePool::new(ANCHOR, 0);
        for i in 1..=1000 {
            pool.try_spawn(i * 1000, 100, 300, &mut rng);
        }
        assert_eq!(pool.len(), capacity(100));
        assert_eq!(capacity(100), 100);
    }

    #[test]
    fn tick_steps_at_25_per_second() {
        let mut pool = SpritePool::new(ANCHOR, 0);
        pool.sprites.push(walker(10, Direction::LeftToRight, 3));

        assert!(!pool.tick(40, 800));
        assert!(pool.tick(41, 800));
        assert_eq!(pool.sprites()[0].pos.x, 13);
        assert_eq!(pool.sprites()[0].frame, 1);
        assert!(!pool.tick(60, 800));
        assert_eq!(pool.sprites()[0].pos.x, 13);
    }

    #[test]
    fn frames_cycle_through_eight() {
        let mut pool = SpritePool::new(ANCHOR, 0);
        pool.sprites.push(walker(10, Direction::LeftToRight, 1));
        for i in 1..=8 {
            pool.tick(i * 41, 800);
        }
        assert_eq!(pool.sprites()[0].frame, 0);
        pool.tick(9 * 41, 800);
        assert_eq!(pool.sprites()[0].frame, 1);
    }

    #[test]
    fn walker_turns_after_crossing_the_edge() {
        let mut pool = SpritePool::new(ANCHOR, 0);
        pool.sprites.push(walker(798, Direction::LeftToRight, 4));
        pool.sprites.push(walker(2, Direction::RightToLeft, 4));

        pool.tick(41, 800);
        // Past the edge, flipped, not pulled back
        assert_eq!(pool.sprites()[0].pos.x, 802);
        assert_eq!(pool.sprites()[0].direction, Direction::RightToLeft);
        assert_eq!(pool.sprites()[1].pos.x, -2);
        assert_eq!(pool.sprites()[1].direction, Direction::LeftToRight);

        pool.tick(82, 800);
        assert_eq!(pool.sprites()[0].pos.x, 798);
        assert_eq!(pool.sprites()[1].pos.x, 2);
    }

    #[test]
    fn reaching_the_edge_exactly_does_not_turn() {
        let mut pool = SpritePool::new(ANCHOR, 0);
        pool.sprites.push(walker(796, Direction::LeftToRight, 4));
        pool.tick(41, 800);
        assert_eq!(pool.sprites()[0].pos.x, 800);
        assert_eq!(pool.sprites()[0].direction, Direction::LeftToRight);
    }

    #[test]
    fn draw_uses_the_sheet_of_the_kind() {
        let mut pool = SpritePool::new(ANCHOR, 0);
        pool.sprites.push(walker(10, Direction::LeftToRight, 1));
        let mut carrier = walker(20, Direction::RightToLeft, 2);
        carrier.kind = SpriteKind::Carrier { ware: 7 };
        pool.sprites.push(carrier);

        let mut canvas = RecordingCanvas::new(800, 600);
        pool.draw(&mut canvas);
        let drawn = canvas.sprites();
        assert_eq!(drawn.len(), 2);
        assert_eq!((drawn[0].sheet, drawn[0].id), (SpriteSheet::Jobs, 0));
        assert_eq!((drawn[1].sheet, drawn[1].id), (SpriteSheet::Carrier, 7));
        assert_eq!(drawn[1].direction, Direction::RightToLeft);
        assert!(!drawn[1].fat);
    }

    proptest! {
        #[test]
        fn pool_never_exceeds_capacity(
            width in 0i32..400,
            fps in 0u32..400,
            steps in proptest::collection::vec(1u64..3000, 1..400),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = SpritePool::new(ANCHOR, 0);
            let mut now = 0;
            for dt in steps {
                now += dt;
                pool.try_spawn(now, width, fps, &mut rng);
                pool.tick(now, width);
                prop_assert!(pool.len() <= capacity(width));
            }
        }
    }
}
