use std::cell::RefCell;
use std::rc::Rc;

use glam::IVec2;

use volley_fist::assets::{Assets, BuiltinAssets};
use volley_fist::audio::{AudioSink, SilentSink, SoundEffect};
use volley_fist::consts::{BALL_SPRITE_SIZE, FIST_SPRITE_SIZE};
use volley_fist::platform::headless::DrawCommand;
use volley_fist::platform::{
    FrameClock, HeadlessText, RecordingDisplay, ScriptedInput, Visual,
};
use volley_fist::sim::{
    Actor, BallState, EndReason, GameEvent, GameState, InputEvent, Key, TickInput, Velocity, tick,
};
use volley_fist::{MatchLoop, Rules, VariantKind};

/// Sink that remembers what it was asked to play
#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<SoundEffect>>>);

impl AudioSink for RecordingSink {
    fn play(&mut self, effect: SoundEffect) {
        self.0.borrow_mut().push(effect);
    }
}

fn new_state(rules: Rules) -> GameState {
    GameState::new(rules, FIST_SPRITE_SIZE, BALL_SPRITE_SIZE, 2024)
}

/// Pointer that centers the fist on the ball
fn aim(state: &GameState) -> IVec2 {
    let center = state.ball.bounds().center();
    IVec2::new(center.x, center.y - FIST_SPRITE_SIZE.y / 2)
}

fn pointer_only(pointer: IVec2) -> TickInput {
    TickInput {
        pointer,
        ..Default::default()
    }
}

fn with_event(pointer: IVec2, event: InputEvent) -> TickInput {
    TickInput {
        events: vec![event],
        pointer,
        ..Default::default()
    }
}

#[test]
fn test_fall_variant_without_input() {
    let mut state = new_state(Rules::VOLLEY);
    assert_eq!(state.ball.bounds().top_left(), IVec2::new(10, 10));

    let mut ticks = 0;
    while state.running() {
        let before = state.ball.bounds();
        let Velocity::Fall(v_before) = state.ball.velocity() else {
            panic!("volley ball should fly");
        };

        tick(&mut state, &TickInput::default());
        ticks += 1;
        assert!(ticks < 2000, "ball never left the arena");

        let Velocity::Fall(v_after) = state.ball.velocity() else {
            panic!("volley ball should fly");
        };
        let crossed_side = before.left() < 0 || before.right() > 440;
        let crossed_top = before.top() < 0;
        assert_eq!(v_after.x != v_before.x, crossed_side, "tick {ticks}");
        assert_eq!(v_after.y != v_before.y, crossed_top, "tick {ticks}");

        let pos = state.ball.bounds().top_left();
        if pos.y > 440 {
            assert!(!state.running(), "top passed the floor but match continued");
        } else {
            assert!(state.running());
            assert!((0..=440).contains(&pos.x), "x out of arena: {pos:?}");
            assert!((0..=440).contains(&pos.y), "y out of arena: {pos:?}");
        }
    }

    assert_eq!(state.end_reason(), Some(EndReason::BallLost));
    assert_eq!(state.score, 0);
    assert_eq!(state.ball.bounds().top(), 441);
    assert!(state.events.contains(&GameEvent::MatchOver(EndReason::BallLost)));
}

#[test]
fn test_walk_variant_spins_while_walking() {
    let mut state = new_state(Rules::WALK);
    assert_eq!(state.arena.size(), IVec2::new(820, 440));

    let pointer = aim(&state);
    tick(&mut state, &pointer_only(pointer));
    let pointer = aim(&state);
    tick(&mut state, &pointer_only(pointer));
    let pointer = aim(&state);
    tick(&mut state, &pointer_only(pointer));

    let x_before = state.ball.bounds().center().x;
    let pointer = aim(&state);
    tick(&mut state, &with_event(pointer, InputEvent::PointerDown));
    assert_eq!(state.score, 1);
    assert_eq!(state.ball.state(), BallState::Spinning);
    // Spin started on the punch and advanced once in the same tick
    assert_eq!(state.ball.spin_angle(), 24);
    assert_eq!(state.ball.bounds().center().x, x_before + 9);

    let mut last_x = state.ball.bounds().center().x;
    while state.ball.state() == BallState::Spinning {
        tick(&mut state, &TickInput::default());
        let x = state.ball.bounds().center().x;
        assert_eq!(x, last_x + 9, "ball stopped walking while spinning");
        last_x = x;
    }
    assert_eq!(state.ball.spin_angle(), 0);
    assert_eq!(state.ball.visual(), state.ball.base_sprite());
    assert!(state.running());
}

#[test]
fn test_score_counts_only_scoring_hits() {
    let mut state = new_state(Rules::JUGGLE);
    let mut hits = 0;
    for round in 0..40 {
        let pointer = if round % 3 == 0 {
            IVec2::new(400, 400)
        } else {
            aim(&state)
        };
        tick(&mut state, &pointer_only(pointer));
        let before = state.score;
        tick(&mut state, &with_event(pointer, InputEvent::PointerDown));
        let landed = state.events.iter().any(|e| matches!(e, GameEvent::Hit { .. }));
        if landed {
            hits += 1;
            assert_eq!(state.score, before + 1);
        } else {
            assert_eq!(state.score, before);
        }
        tick(&mut state, &with_event(pointer, InputEvent::PointerUp));
        if !state.running() {
            break;
        }
    }
    assert!(hits > 0);
    assert_eq!(state.score, hits);
}

#[test]
fn test_full_match_plays_cues_and_renders_score() {
    let assets = Assets::load(&BuiltinAssets).unwrap();
    let sink = RecordingSink::default();
    let played = Rc::clone(&sink.0);
    let mut game = MatchLoop::new(VariantKind::Rally, &assets, Box::new(sink), 3)
        .with_clock(FrameClock::unthrottled());

    // Ball is at (11, 11) after the first tick; center (41, 41)
    let on_ball = IVec2::new(41, 41 - FIST_SPRITE_SIZE.y / 2);
    let off_ball = IVec2::new(400, 300);
    let mut input = ScriptedInput::new();
    input
        .push_frame(Some(on_ball), vec![])
        .push_frame(None, vec![InputEvent::PointerDown])
        .push_frame(Some(off_ball), vec![InputEvent::PointerUp])
        .push_frame(None, vec![InputEvent::PointerDown])
        .push_frame(None, vec![InputEvent::PointerUp])
        .push_frame(None, vec![InputEvent::KeyDown(Key::Char('q'))]);
    let mut display = RecordingDisplay::new();

    let report = game.run(&mut input, &mut display, &mut HeadlessText);

    assert_eq!(report.score, 1);
    assert_eq!(report.end, Some(EndReason::Quit));
    assert_eq!(report.ticks, 6);
    // Rally stays quiet on the miss
    assert_eq!(*played.borrow(), vec![SoundEffect::Punch]);
    assert_eq!(display.frames_presented(), 5);

    let label = display.last_frame().iter().find_map(|cmd| match cmd {
        DrawCommand::Blit(Visual::Text { text, .. }, _) => Some(text.clone()),
        _ => None,
    });
    assert_eq!(label.as_deref(), Some("Score 1"));
}

#[test]
fn test_walk_match_whiffs_on_a_miss() {
    let assets = Assets::load(&BuiltinAssets).unwrap();
    let sink = RecordingSink::default();
    let played = Rc::clone(&sink.0);
    let mut game = MatchLoop::new(VariantKind::Walk, &assets, Box::new(sink), 3)
        .with_clock(FrameClock::unthrottled());

    let mut input = ScriptedInput::new();
    input
        .push_frame(Some(IVec2::new(400, 300)), vec![])
        .push_frame(None, vec![InputEvent::PointerDown])
        .push_frame(None, vec![InputEvent::PointerUp])
        .push_frame(None, vec![InputEvent::Quit]);

    let report = game.run(&mut input, &mut RecordingDisplay::new(), &mut HeadlessText);
    assert_eq!(report.score, 0);
    assert_eq!(report.end, Some(EndReason::Quit));
    assert_eq!(*played.borrow(), vec![SoundEffect::Whiff]);
}

#[test]
fn test_autopilot_demo_for_every_variant() {
    let assets = Assets::load(&BuiltinAssets).unwrap();
    for variant in VariantKind::ALL {
        let mut game = MatchLoop::new(variant, &assets, Box::new(SilentSink), 11)
            .with_clock(FrameClock::unthrottled())
            .with_idle_mode(true)
            .with_max_ticks(Some(900));
        let report = game.run(
            &mut ScriptedInput::new(),
            &mut RecordingDisplay::new(),
            &mut HeadlessText,
        );
        assert!(report.ticks <= 900, "{}", variant.as_str());
        assert!(report.end.is_some());
        if variant == VariantKind::Walk {
            assert_eq!(report.end, Some(EndReason::TickLimit));
        }
    }
}
