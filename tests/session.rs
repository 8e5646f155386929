use bubble_pop::audio::{self, AudioPlayer, SoundEffect};
use bubble_pop::sim::{GameEvent, GamePhase, InputEvent, Lifecycle, Session, handle_input, tick};
use bubble_pop::{CollisionPolicy, ConfigError, SessionConfig};
use glam::Vec2;

/// Session that never spawns on its own: two parked bubbles fill the limit
fn quiet_session(policy: CollisionPolicy) -> Session {
    let mut config = SessionConfig::with_policy(policy);
    config.max_bubbles = 1;
    config.growth_period_ticks = 1000;
    config.animation_cadence = 0;
    let mut session = Session::new(config, 77).unwrap();
    session.spawn_bubble_at(Vec2::new(1100.0, 100.0), 10.0, 0.0);
    session.spawn_bubble_at(Vec2::new(1100.0, 650.0), 10.0, 0.0);
    session.drain_events();
    session
}

fn pop_sounds(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::PopSound { .. }))
        .count()
}

#[test]
fn click_on_bubble_awards_radius_and_one_sound() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    let id = session.spawn_bubble_at(Vec2::new(400.0, 300.0), 37.0, 0.0);

    tick(&mut session, &[InputEvent::PointerClick(Vec2::new(400.0, 300.0))]);

    assert_eq!(session.score, 37);
    assert_eq!(session.phase, GamePhase::Playing);
    assert!(session.bubble(id).is_some_and(|b| b.is_popping()));
    assert_eq!(pop_sounds(&session.drain_events()), 1);
}

#[test]
fn click_on_empty_space_is_silent() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    session.spawn_bubble_at(Vec2::new(400.0, 300.0), 20.0, 0.0);
    session.drain_events();

    tick(&mut session, &[InputEvent::PointerClick(Vec2::new(700.0, 300.0))]);

    assert_eq!(session.score, 0);
    assert_eq!(pop_sounds(&session.drain_events()), 0);
}

#[test]
fn click_pops_lowest_id_only() {
    let mut session = quiet_session(CollisionPolicy::ForcedPop);
    let first = session.spawn_bubble_at(Vec2::new(400.0, 300.0), 20.0, 0.0);
    let second = session.spawn_bubble_at(Vec2::new(410.0, 300.0), 25.0, 0.0);
    session.drain_events();

    assert_eq!(session.pop_at(Vec2::new(405.0, 300.0)), Some(first));
    assert_eq!(session.score, 20);
    assert!(session.bubble(second).is_some_and(|b| b.is_growing()));
    assert_eq!(pop_sounds(&session.drain_events()), 1);

    // Clicking the same spot again reaches the next growing bubble
    assert_eq!(session.pop_at(Vec2::new(405.0, 300.0)), Some(second));
    assert_eq!(session.score, 45);
}

#[test]
fn repeated_click_on_popping_bubble_does_nothing() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    session.spawn_bubble_at(Vec2::new(400.0, 300.0), 15.0, 0.0);
    session.drain_events();

    assert!(session.pop_at(Vec2::new(400.0, 300.0)).is_some());
    assert!(session.pop_at(Vec2::new(400.0, 300.0)).is_none());
    assert_eq!(session.score, 15);
    assert_eq!(pop_sounds(&session.drain_events()), 1);
}

#[test]
fn pop_animation_runs_then_bubble_is_dropped() {
    let mut config = SessionConfig::with_policy(CollisionPolicy::GameOver);
    config.max_bubbles = 1;
    config.growth_period_ticks = 1000;
    config.animation_cadence = 0;
    config.frame_count = 4;
    let mut session = Session::new(config, 3).unwrap();
    session.spawn_bubble_at(Vec2::new(1100.0, 100.0), 10.0, 0.0);
    let id = session.spawn_bubble_at(Vec2::new(400.0, 300.0), 30.0, 0.0);

    session.pop_at(Vec2::new(400.0, 300.0));
    assert_eq!(session.bubble(id).map(|b| b.frame), Some(0));

    tick(&mut session, &[]);
    assert_eq!(session.bubble(id).map(|b| b.frame), Some(1));
    tick(&mut session, &[]);
    assert_eq!(session.bubble(id).map(|b| b.frame), Some(2));
    // Frame 3 > 4 - 2: removed on the same tick
    tick(&mut session, &[]);
    assert!(session.bubble(id).is_none());

    let events = session.drain_events();
    assert!(events.contains(&GameEvent::BubbleChanged {
        id,
        lifecycle: Lifecycle::Removed,
        frame: 3,
    }));
}

#[test]
fn popped_radius_stays_frozen_through_growth() {
    let mut config = SessionConfig::with_policy(CollisionPolicy::GameOver);
    config.max_bubbles = 1;
    config.growth_period_ticks = 1;
    config.animation_cadence = 3;
    let mut session = Session::new(config, 3).unwrap();
    session.spawn_bubble_at(Vec2::new(1100.0, 100.0), 10.0, 0.0);
    let id = session.spawn_bubble_at(Vec2::new(400.0, 300.0), 30.0, 4.0);

    tick(&mut session, &[]);
    assert_eq!(session.bubble(id).map(|b| b.radius), Some(34.0));

    session.pop_at(Vec2::new(400.0, 300.0));
    for _ in 0..5 {
        tick(&mut session, &[]);
        assert_eq!(session.bubble(id).map(|b| b.radius), Some(34.0));
    }
}

#[test]
fn overlapping_bubbles_end_the_round() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    session.spawn_bubble_at(Vec2::new(400.0, 300.0), 8.0, 0.0);
    session.spawn_bubble_at(Vec2::new(412.0, 300.0), 6.0, 0.0);

    tick(&mut session, &[]);

    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.high_scores.top_score(), None);
}

#[test]
fn overlapping_bubbles_are_force_popped() {
    let mut session = quiet_session(CollisionPolicy::ForcedPop);
    let a = session.spawn_bubble_at(Vec2::new(400.0, 300.0), 8.0, 0.0);
    let b = session.spawn_bubble_at(Vec2::new(412.0, 300.0), 6.0, 0.0);
    session.drain_events();

    tick(&mut session, &[]);

    assert_eq!(session.phase, GamePhase::Playing);
    assert!(session.bubble(a).is_some_and(|b| b.is_popping()));
    assert!(session.bubble(b).is_some_and(|b| b.is_popping()));
    assert_eq!(session.score, 0);
    assert_eq!(pop_sounds(&session.drain_events()), 0);
}

#[test]
fn bubble_past_left_edge_ends_the_round() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    session.spawn_bubble_at(Vec2::new(2.0, 300.0), 5.0, 0.0);

    tick(&mut session, &[]);

    assert_eq!(session.phase, GamePhase::GameOver);
}

#[test]
fn game_over_is_final_until_restart() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    let id = session.spawn_bubble_at(Vec2::new(600.0, 300.0), 30.0, 0.0);
    session.pop_at(Vec2::new(600.0, 300.0));
    session.spawn_bubble_at(Vec2::new(2.0, 300.0), 5.0, 0.0);
    tick(&mut session, &[]);
    assert_eq!(session.phase, GamePhase::GameOver);
    let snapshot = |s: &Session| -> Vec<(u32, Lifecycle, u32, f32)> {
        s.bubbles.iter().map(|b| (b.id, b.lifecycle, b.frame, b.radius)).collect()
    };
    let frozen = snapshot(&session);

    // Clicks, pause toggles and ticks change nothing
    tick(
        &mut session,
        &[
            InputEvent::PointerClick(Vec2::new(1100.0, 100.0)),
            InputEvent::TogglePause,
        ],
    );
    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.score, 30);
    assert_eq!(snapshot(&session), frozen);
    assert!(session.bubble(id).is_some());
}

#[test]
fn restart_clears_the_round() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    session.spawn_bubble_at(Vec2::new(600.0, 300.0), 30.0, 0.0);
    session.pop_at(Vec2::new(600.0, 300.0));
    session.spawn_bubble_at(Vec2::new(2.0, 300.0), 5.0, 0.0);
    tick(&mut session, &[]);
    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.high_scores.top_score(), Some(30));

    handle_input(&mut session, InputEvent::Restart);

    assert_eq!(session.round, 2);
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.score, 0);
    assert!(session.bubbles.is_empty());
    assert_eq!(session.growth_timer, 1000);
    assert_eq!(session.time_ticks, 0);
    assert_eq!(session.view().high_score, Some(30));
    assert!(session.drain_events().contains(&GameEvent::Restarted));
}

#[test]
fn restart_ignored_while_playing() {
    let mut session = quiet_session(CollisionPolicy::GameOver);
    session.score = 10;
    tick(&mut session, &[InputEvent::Restart]);
    assert_eq!(session.score, 10);
    assert_eq!(session.round, 1);
}

#[test]
fn paused_ticks_freeze_everything() {
    let mut config = SessionConfig::with_policy(CollisionPolicy::ForcedPop);
    config.growth_period_ticks = 7;
    let mut session = Session::new(config, 2024).unwrap();
    for _ in 0..10 {
        tick(&mut session, &[]);
    }
    session.pop_at(session.bubbles[0].center);

    tick(&mut session, &[InputEvent::TogglePause]);
    assert_eq!(session.phase, GamePhase::Paused);
    let timer = session.growth_timer;
    let ticks = session.time_ticks;
    let frozen = session.view();

    for _ in 0..200 {
        tick(&mut session, &[]);
    }
    assert_eq!(session.growth_timer, timer);
    assert_eq!(session.time_ticks, ticks);
    assert_eq!(session.view(), frozen);

    tick(&mut session, &[InputEvent::TogglePause]);
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.time_ticks, ticks + 1);
    let expected = if timer == 1 { 7 } else { timer - 1 };
    assert_eq!(session.growth_timer, expected);
}

#[test]
fn audio_dispatch_follows_intents() {
    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);
    impl AudioPlayer for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    let mut session = quiet_session(CollisionPolicy::GameOver);
    session.spawn_bubble_at(Vec2::new(400.0, 300.0), 20.0, 0.0);
    session.spawn_bubble_at(Vec2::new(2.0, 600.0), 5.0, 0.0);

    tick(&mut session, &[InputEvent::PointerClick(Vec2::new(400.0, 300.0))]);

    let mut recorder = Recorder::default();
    audio::dispatch(&session.drain_events(), &mut recorder);
    assert_eq!(recorder.0, vec![SoundEffect::Pop, SoundEffect::GameOver]);
}

#[test]
fn missing_policy_refuses_to_start() {
    let config = SessionConfig::from_json(r#"{ "max_bubbles": 3 }"#).unwrap();
    assert_eq!(
        Session::new(config, 1).unwrap_err(),
        ConfigError::MissingCollisionPolicy
    );
}
