//! What a decorative walker looks like.
//!
//! A walker is picked by drawing one of the game's jobs. Most jobs map
//! straight to a row of the job sheet; soldiers and scouts have one row per
//! nation, and the jobs that only ever work indoors are shown as carriers
//! hauling a ware instead.

use rand::Rng;

/// Number of jobs the walker draw picks from.
pub const JOB_COUNT: usize = 29;

/// Ware types a carrier can hold. The last ware type is never carried.
pub const WARE_TYPES: u16 = 40;

/// Jobs without an outdoor walking animation.
const INDOOR_JOBS: [usize; 4] = [JOB_MILLER, JOB_BAKER, JOB_BREWER, JOB_ARMORER];

const JOB_MILLER: usize = 8;
const JOB_BAKER: usize = 9;
const JOB_BREWER: usize = 12;
const JOB_ARMORER: usize = 18;
const JOB_PRIVATE: usize = 21;
const JOB_GENERAL: usize = 25;
const JOB_SCOUT: usize = 28;

const SOLDIER_BASE: u16 = 30;
const SCOUT_BASE: u16 = 35;
const ROWS_PER_SKIN: u16 = 6;

/// Job name and its row on the job sheet.
pub const JOBS: [(&str, u16); JOB_COUNT] = [
    ("helper", 0),
    ("woodcutter", 5),
    ("fisher", 12),
    ("forester", 8),
    ("carpenter", 6),
    ("stonemason", 7),
    ("hunter", 20),
    ("farmer", 14),
    ("miller", 3),
    ("baker", 4),
    ("butcher", 15),
    ("miner", 9),
    ("brewer", 2),
    ("pig breeder", 16),
    ("donkey breeder", 17),
    ("iron founder", 18),
    ("minter", 19),
    ("metalworker", 11),
    ("armorer", 10),
    ("builder", 23),
    ("planer", 22),
    ("private", SOLDIER_BASE),
    ("private first class", SOLDIER_BASE + 1),
    ("sergeant", SOLDIER_BASE + 2),
    ("officer", SOLDIER_BASE + 3),
    ("general", SOLDIER_BASE + 4),
    ("geologist", 24),
    ("shipwright", 25),
    ("scout", SCOUT_BASE),
];

/// Sheet skin of each playable nation (africans, japanese, romans, vikings).
pub const NATION_SKINS: [u16; 4] = [3, 2, 0, 1];

/// Player colors, `0xAARRGGBB`.
pub const PLAYER_COLORS: [u32; 11] = [
    0xFF00_5BFF, // blue
    0xFFFF_FF00, // yellow
    0xFFFF_0000, // red
    0xFFFF_8000, // orange
    0xFF00_C800, // green
    0xFF00_FFFF, // cyan
    0xFFFF_00FF, // magenta
    0xFF80_8080, // gray
    0xFF80_00FF, // purple
    0xFF80_4000, // brown
    0xFFFF_A0C0, // pink
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// Row of the job sheet.
    Worker { sprite: u16 },
    /// Carrier hauling the given ware.
    Carrier { ware: u16 },
}

impl SpriteKind {
    /// Maps a drawn job to the figure that shows it.
    ///
    /// `rng` is only consulted for carriers (ware) and for soldiers and
    /// scouts (nation skin).
    fn for_job<R: Rng>(job: usize, rng: &mut R) -> Self {
        if INDOOR_JOBS.contains(&job) {
            return SpriteKind::Carrier { ware: rng.random_range(0..WARE_TYPES - 1) };
        }

        match job {
            JOB_SCOUT => {
                let skin = NATION_SKINS[rng.random_range(0..NATION_SKINS.len())];
                SpriteKind::Worker { sprite: SCOUT_BASE + skin * ROWS_PER_SKIN }
            }
            JOB_PRIVATE..=JOB_GENERAL => {
                let skin = NATION_SKINS[rng.random_range(0..NATION_SKINS.len())];
                let rank = (job - JOB_PRIVATE) as u16;
                SpriteKind::Worker { sprite: SOLDIER_BASE + skin * ROWS_PER_SKIN + rank }
            }
            _ => SpriteKind::Worker { sprite: JOBS[job].1 },
        }
    }

    /// Draws a job and maps it.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let job = rng.random_range(0..JOB_COUNT);
        Self::for_job(job, rng)
    }
}
