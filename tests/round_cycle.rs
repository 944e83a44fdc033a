use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use paddle_duel::platform::ScriptedInput;
use paddle_duel::renderer::DrawList;
use paddle_duel::sim::{FrameInput, GameEvent, GamePhase, Rect};
use paddle_duel::{GameController, Settings};

fn controller(seed: u64) -> GameController {
    GameController::with_rng(&Settings::default(), Pcg32::seed_from_u64(seed))
}

fn press_confirm() -> FrameInput {
    FrameInput {
        confirm: true,
        ..Default::default()
    }
}

#[test]
fn test_idle_running_idle_cycle() {
    let mut game = controller(2024);
    let mut list = DrawList::default();
    let mut input = ScriptedInput::new([press_confirm()]);

    assert_eq!(game.phase(), GamePhase::Idle);
    game.step(&mut input, &mut list);
    assert_eq!(game.phase(), GamePhase::Running);

    // Play a few frames so the paddles leave their start spots
    for _ in 0..5 {
        input.push(FrameInput {
            up: true,
            ..Default::default()
        });
        game.step(&mut input, &mut list);
    }
    assert_eq!(game.phase(), GamePhase::Running);
    assert_ne!(game.state().player.rect.top, 220.0);

    // Shove the ball past the player
    game.state_mut().ball.rect.left = -100.0;
    let outcome = game.step(&mut input, &mut list);

    assert!(
        outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::RoundLost { .. }))
    );
    let state = game.state();
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.ball.rect, Rect::new(400.0, 300.0, 20.0, 20.0));
    assert_eq!(state.player.rect, Rect::new(10.0, 220.0, 10.0, 160.0));
    assert_eq!(state.enemy.rect, Rect::new(780.0, 220.0, 10.0, 160.0));
    assert_eq!(state.ball.direction.x.abs(), 1.0);
    assert_eq!(state.ball.direction.y.abs(), 1.0);
    assert_eq!(state.rounds_lost, 1);

    // And the next round can start again
    input.push(press_confirm());
    game.step(&mut input, &mut list);
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn test_seeded_serves_are_reproducible() {
    let mut a = controller(31);
    let mut b = controller(31);
    let mut list = DrawList::default();

    for _ in 0..5 {
        assert_eq!(a.state().ball.direction, b.state().ball.direction);
        for game in [&mut a, &mut b] {
            let mut input = ScriptedInput::new([press_confirm()]);
            game.step(&mut input, &mut list);
            game.state_mut().ball.rect.left = -100.0;
            game.step(&mut input, &mut list);
            assert_eq!(game.phase(), GamePhase::Idle);
        }
    }
}

#[test]
fn test_wall_bounce_through_the_frame_loop() {
    let mut game = controller(7);
    let mut list = DrawList::default();
    let mut input = ScriptedInput::new([press_confirm()]);
    game.step(&mut input, &mut list);

    let ball = &mut game.state_mut().ball;
    ball.rect = Rect::new(400.0, -15.0, 20.0, 20.0);
    ball.direction = Vec2::new(0.0, 1.0);
    let outcome = game.step(&mut input, &mut list);

    assert!(outcome.events.contains(&GameEvent::WallBounce));
    let ball = &game.state().ball;
    assert_eq!(ball.direction.y, -1.0);
    assert_eq!(ball.rect.y(), 5.0);
}

#[test]
fn test_cancel_mid_round() {
    let mut game = controller(9);
    let mut list = DrawList::default();
    let mut input = ScriptedInput::new([
        press_confirm(),
        FrameInput::default(),
        FrameInput {
            cancel: true,
            ..Default::default()
        },
    ]);

    game.step(&mut input, &mut list);
    game.step(&mut input, &mut list);
    assert_ne!(game.state().ball.rect, Rect::new(400.0, 300.0, 20.0, 20.0));

    let outcome = game.step(&mut input, &mut list);
    assert_eq!(outcome.events, vec![GameEvent::Cancelled]);
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.state().rounds_lost, 0);
}
