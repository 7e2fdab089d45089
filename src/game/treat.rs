use super::point::Point;
use super::snake::Snake;
use super::wall::Wall;
use crate::config::GameConfig;
use log::debug;
use rand::{seq::IteratorRandom, Rng};
use thiserror::Error;

/// Number of uniformly random cells to try before falling back to scanning
/// the whole arena for a free cell
pub(crate) const MAX_RANDOM_PLACEMENT_ATTEMPTS: u32 = 64;

/// Places the treat, and moves it once it has gone uneaten for too long
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreatSpawner {
    box_size: u16,
    timeout_millis: u64,
}

impl TreatSpawner {
    pub fn new(config: &GameConfig) -> TreatSpawner {
        TreatSpawner {
            box_size: config.box_size,
            timeout_millis: config.treat_timeout_millis,
        }
    }

    /// Make sure a fresh treat is on the board.
    ///
    /// `age_millis` is how long the current treat (if any) has been in
    /// place.  A treat that is younger than the staleness timeout is kept; a
    /// missing treat is placed; a stale treat is moved to a different cell,
    /// unless there is no other cell for it to go to, in which case it stays
    /// where it is and merely counts as freshly placed.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::ArenaFull` if a treat is needed and every cell
    /// inside the wall is taken by the snake.
    pub fn ensure_treat<R: Rng + ?Sized>(
        &self,
        treat: Option<Point>,
        age_millis: u64,
        wall: &Wall,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        match treat {
            Some(p) if age_millis < self.timeout_millis => Ok(Placement::Kept(p)),
            Some(stale) => {
                let p = self.place(wall, snake, Some(stale), rng).unwrap_or(stale);
                debug!("Treat at {stale} went stale after {age_millis}ms; moved to {p}");
                Ok(Placement::Relocated(p))
            }
            None => {
                let p = self.place(wall, snake, None, rng)?;
                debug!("Placed treat at {p}");
                Ok(Placement::Placed(p))
            }
        }
    }

    /// Pick a cell strictly inside the wall that is not occupied by the snake
    /// and is not `exclude`
    fn place<R: Rng + ?Sized>(
        &self,
        wall: &Wall,
        snake: &Snake,
        exclude: Option<Point>,
        rng: &mut R,
    ) -> Result<Point, PlacementError> {
        let free = |p: &Point| {
            !p.collides_with_any(wall.points())
                && !snake.contains(*p)
                && !p.collides_with_any(exclude)
        };
        let max = i32::from(self.box_size) - 2;
        for _ in 0..MAX_RANDOM_PLACEMENT_ATTEMPTS {
            let candidate = Point::new(rng.random_range(1..=max), rng.random_range(1..=max));
            if free(&candidate) {
                return Ok(candidate);
            }
        }
        wall.interior()
            .filter(free)
            .choose(rng)
            .ok_or(PlacementError::ArenaFull)
    }
}

/// What [`TreatSpawner::ensure_treat()`] did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    /// The existing treat is still fresh and was left alone
    Kept(Point),

    /// There was no treat, and one was placed
    Placed(Point),

    /// The existing treat was stale and was moved
    Relocated(Point),
}

impl Placement {
    pub fn point(self) -> Point {
        match self {
            Placement::Kept(p) | Placement::Placed(p) | Placement::Relocated(p) => p,
        }
    }

    /// Returns `true` if the treat was (re)placed and its age should start
    /// over
    pub fn is_fresh(self) -> bool {
        !matches!(self, Placement::Kept(_))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PlacementError {
    #[error("no free cell left in the arena for a treat")]
    ArenaFull,
}
