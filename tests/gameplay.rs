use boxsnake::game::{Direction, Game, GameOverCause, Point, Status};
use boxsnake::GameConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::collections::HashSet;

/// Steer the snake clockwise around the square with corners `(lo, lo)` and
/// `(hi, hi)`
fn steer_around<R>(game: &mut Game<R>, lo: i32, hi: i32) {
    let state = game.state();
    let head = state.snake.head();
    let turn = match state.direction {
        Direction::Up if head.y >= hi => Direction::Right,
        Direction::Right if head.x >= hi => Direction::Down,
        Direction::Down if head.y <= lo => Direction::Left,
        Direction::Left if head.x <= lo => Direction::Up,
        d => d,
    };
    game.set_direction(turn);
}

#[test]
fn run_into_left_wall() {
    let mut game =
        Game::new_with_rng(GameConfig::default(), ChaCha12Rng::seed_from_u64(1)).unwrap();
    game.set_direction(Direction::Left);
    let mut ticks = 0;
    while game.status() == Status::Running {
        game.tick();
        ticks += 1;
        assert!(ticks <= 10, "snake should have hit the wall by now");
    }
    let state = game.state().clone();
    assert_eq!(state.game_over, Some(GameOverCause::Wall));
    assert_eq!(state.collision, Some(Point::new(0, 3)));
    assert_eq!(state.snake.head(), Point::new(1, 3));
    assert_eq!(ticks, 10);
    for _ in 0..5 {
        game.tick();
    }
    assert_eq!(game.state(), &state);
}

#[test]
fn levels_up_while_circling() {
    let mut game =
        Game::new_with_rng(GameConfig::default(), ChaCha12Rng::seed_from_u64(2)).unwrap();
    let expected = [(2, 400), (3, 300), (4, 300)];
    for (level, interval) in expected {
        for _ in 0..20 {
            steer_around(&mut game, 2, 17);
            game.tick();
        }
        let state = game.state();
        assert_eq!(state.game_over, None);
        assert_eq!(state.level, level);
        assert_eq!(state.tick_interval_millis, interval);
        assert_eq!(state.ticks_since_level_up, 0);
    }
}

#[test]
fn pause_freezes_game() {
    let mut game =
        Game::new_with_rng(GameConfig::default(), ChaCha12Rng::seed_from_u64(3)).unwrap();
    game.tick();
    game.pause();
    let frozen = game.state().clone();
    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.state(), &frozen);
    game.resume();
    game.tick();
    assert_ne!(game.state().snake, frozen.snake);
    assert_eq!(game.state().ticks_since_level_up, 2);
}

/// Play many games with a snake that turns at random, and check the game's
/// invariants after every tick
#[test]
fn invariants_hold_under_random_play() {
    let config = GameConfig {
        box_size: 8,
        snake_length: 3,
        level_interval_ticks: 5,
        treat_timeout_millis: 2000,
        ..GameConfig::default()
    };
    for seed in 0..200 {
        let mut game = Game::new_with_rng(config, ChaCha12Rng::seed_from_u64(seed)).unwrap();
        let mut steering = ChaCha12Rng::seed_from_u64(seed + 1000);
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for _ in 0..500 {
            if game.status() != Status::Running {
                break;
            }
            let before = game.state().clone();
            game.set_direction(directions[steering.random_range(0..4)]);
            let report = game.tick();
            let after = game.state();
            if after.game_over.is_some() {
                assert_eq!(report.game_over, after.game_over);
                assert!(after.snake.len() >= before.snake.len());
                break;
            }
            let cells = after.snake.iter().copied().collect::<HashSet<_>>();
            assert_eq!(cells.len(), after.snake.len(), "snake overlaps itself");
            assert!(after.snake.len() >= 3);
            if report.ate_treat {
                assert_eq!(after.snake.len(), before.snake.len() + 1);
                assert_eq!(after.score, before.score + before.level);
            } else {
                assert_eq!(after.snake.len(), before.snake.len());
                assert_eq!(after.score, before.score);
            }
            let treat = after.treat.expect("a treat should be placed while running");
            assert!(!game.wall().contains(treat));
            assert!(!after.snake.contains(treat));
            assert!(!(report.ate_treat && report.treat_relocated));
            if !report.ate_treat && !report.treat_relocated && before.treat.is_some() {
                assert_eq!(after.treat, before.treat);
            }
        }
    }
}
