use std::time::Duration;

use gridsnake::{
    Coordinate, Direction, EndReason, GameConfig, GameEngine, GameEvent, HighScoreStore,
    ManualScheduler, MemoryHighScore, SchedulerCall, SpeedLevel, Status, TickOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cells(cells: &[(i32, i32)]) -> Vec<Coordinate> {
    cells.iter().map(|&c| Coordinate::from(c)).collect()
}

fn start(config: GameConfig, high_score: u32) -> GameEngine<ManualScheduler, StdRng> {
    let mut engine = GameEngine::with_rng(
        config,
        high_score,
        ManualScheduler::new(),
        StdRng::seed_from_u64(2024),
    )
    .unwrap();
    engine.start();
    engine.drain_events();
    engine
}

fn body(engine: &GameEngine<ManualScheduler, StdRng>) -> Vec<Coordinate> {
    engine.snake().segments().collect()
}

#[test]
fn test_eating_grows_snake_and_scores() {
    let config = GameConfig {
        initial_food: Some(Coordinate::new(9, 8)),
        ..GameConfig::default()
    };
    let mut engine = start(config, 0);

    assert_eq!(engine.tick(), TickOutcome::Moved { ate_food: true });

    assert_eq!(body(&engine), cells(&[(9, 8), (8, 8), (7, 8), (6, 8)]));
    assert_eq!(engine.score(), 1);
    assert!(!engine.snake().contains(engine.food()));
}

#[test]
fn test_right_wall_ends_game() {
    let config = GameConfig {
        initial_body: cells(&[(19, 10), (18, 10), (17, 10)]),
        ..GameConfig::default()
    };
    let mut engine = start(config, 0);
    let before = body(&engine);

    assert_eq!(engine.tick(), TickOutcome::Ended(EndReason::Wall));

    assert_eq!(engine.status(), Status::GameOver);
    assert_eq!(body(&engine), before);
    assert_eq!(engine.scheduler().armed(), None);
}

#[test]
fn test_turning_into_own_loop_ends_game() {
    let config = GameConfig {
        initial_body: cells(&[(5, 5), (6, 5), (6, 6), (5, 6)]),
        initial_direction: Direction::Left,
        ..GameConfig::default()
    };
    let mut engine = start(config, 0);

    assert!(engine.set_direction(Direction::Down));
    assert_eq!(engine.tick(), TickOutcome::Ended(EndReason::SelfCollision));
    assert_eq!(engine.status(), Status::GameOver);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_beating_high_score_saves_once() {
    // eat 7 pellets in a row along row 8, then hit the right wall
    let config = GameConfig {
        initial_food: Some(Coordinate::new(9, 8)),
        ..GameConfig::default()
    };
    let mut store = MemoryHighScore::new(5);
    let mut engine = start(config, store.load());

    for x in 9..16 {
        assert!(engine.set_food(Coordinate::new(x, 8)));
        assert_eq!(engine.tick(), TickOutcome::Moved { ate_food: true });
    }
    assert_eq!(engine.score(), 7);
    assert!(engine.set_food(Coordinate::new(0, 0)));
    while engine.status() == Status::Running {
        engine.tick();
    }

    let events = engine.drain_events();
    for event in &events {
        if let GameEvent::PersistHighScore(score) = event {
            store.save(*score);
        }
    }

    assert_eq!(engine.high_score(), 7);
    assert_eq!(store.load(), 7);
    assert_eq!(store.saves(), 1);
    assert!(events.contains(&GameEvent::GameOver {
        score: 7,
        reason: EndReason::Wall,
        new_high_score: true,
    }));

    // a fresh game keeps the high score and starts from zero
    engine.reset();
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.high_score(), 7);
}

#[test]
fn test_speed_change_rearms_without_ticking() {
    let mut engine = start(GameConfig::default(), 0);
    assert_eq!(engine.scheduler().armed(), Some(Duration::from_millis(130)));
    engine.scheduler_mut().clear_calls();
    let before = body(&engine);

    engine.set_level(SpeedLevel::new(5).unwrap());

    assert_eq!(
        engine.scheduler().calls(),
        &[
            SchedulerCall::Disarm,
            SchedulerCall::Arm(Duration::from_millis(50)),
        ]
    );
    assert_eq!(body(&engine), before);
    assert!(engine.drain_events().is_empty());

    // the next delivered tick moves exactly one cell
    engine.tick();
    assert_eq!(engine.snake().head(), Coordinate::new(9, 8));
}

#[test]
fn test_pause_twice_stays_paused() {
    let mut engine = start(GameConfig::default(), 0);

    engine.pause();
    engine.pause();

    assert_eq!(engine.status(), Status::Paused);
    assert_eq!(engine.scheduler().armed(), None);
    assert_eq!(engine.tick(), TickOutcome::Skipped);
}

#[test]
fn test_food_never_lands_on_snake_during_play() {
    // sweep the board in a serpentine pattern, eating whatever is in the way
    let config = GameConfig {
        board_size: 8,
        initial_body: cells(&[(2, 0), (1, 0), (0, 0)]),
        initial_direction: Direction::Right,
        initial_food: None,
        level: SpeedLevel::default(),
    };
    let mut engine = start(config, 0);

    for row in 0..7 {
        let along = if row % 2 == 0 { Direction::Right } else { Direction::Left };
        engine.set_direction(along);
        for _ in 0..5 {
            if engine.status() != Status::Running {
                return;
            }
            engine.tick();
            assert!(!engine.snake().contains(engine.food()));
        }
        engine.set_direction(Direction::Down);
        if engine.status() == Status::Running {
            engine.tick();
            assert!(!engine.snake().contains(engine.food()));
        }
    }
}
