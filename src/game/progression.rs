use crate::config::GameConfig;

/// Level & speed schedule.
///
/// Every `level_interval_ticks` ticks the level goes up by one and the time
/// between ticks shrinks by `level_increase_millis`, but never below
/// `minimum_interval_millis`.  The new interval is only reported; actually
/// waiting that long is up to whoever is driving the game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Progression {
    level_interval_ticks: u32,
    level_increase_millis: u64,
    minimum_interval_millis: u64,
}

impl Progression {
    pub fn new(config: &GameConfig) -> Progression {
        Progression {
            level_interval_ticks: config.level_interval_ticks,
            level_increase_millis: config.level_increase_millis,
            minimum_interval_millis: config.minimum_interval_millis,
        }
    }

    /// Account for one more completed tick
    pub fn advance(&self, level: u32, ticks_since_level_up: u32, interval_millis: u64) -> Advance {
        let ticks = ticks_since_level_up.saturating_add(1);
        if ticks < self.level_interval_ticks {
            return Advance {
                level,
                ticks_since_level_up: ticks,
                tick_interval_millis: interval_millis,
                leveled_up: false,
            };
        }
        Advance {
            level: level.saturating_add(1),
            ticks_since_level_up: 0,
            tick_interval_millis: interval_millis
                .saturating_sub(self.level_increase_millis)
                .max(self.minimum_interval_millis),
            leveled_up: true,
        }
    }
}

/// The outcome of [`Progression::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Advance {
    pub level: u32,
    pub ticks_since_level_up: u32,
    pub tick_interval_millis: u64,
    pub leveled_up: bool,
}
