use std::time::Duration;

use life_trail_core::{Command, Event, TrailSize};
use life_trail_system_playback::{Config, Playback};

fn elapsed(millis: u64) -> Event {
    Event::TimeAdvanced {
        dt: Duration::from_millis(millis),
    }
}

#[test]
fn stopped_playback_emits_nothing() {
    let mut playback = Playback::new(Config::new(Duration::from_millis(100), TrailSize::NONE));
    let mut commands = Vec::new();
    playback.handle(&[elapsed(1_000)], &mut commands);
    assert!(commands.is_empty());
    assert!(!playback.is_running());
}

#[test]
fn emits_one_advance_per_interval() {
    let trail = TrailSize::new(4);
    let mut playback = Playback::new(Config::new(Duration::from_millis(500), trail));
    playback.start();

    let mut commands = Vec::new();
    playback.handle(&[elapsed(1_200), elapsed(300)], &mut commands);
    assert_eq!(commands, vec![Command::Advance { trail }; 3]);
}

#[test]
fn partial_intervals_accumulate() {
    let mut playback = Playback::new(Config::new(Duration::from_millis(500), TrailSize::NONE));
    playback.start();

    let mut commands = Vec::new();
    playback.handle(&[elapsed(300)], &mut commands);
    assert!(commands.is_empty(), "no advance before a full interval");

    playback.handle(&[elapsed(200)], &mut commands);
    assert_eq!(commands.len(), 1, "advance once the interval completes");
}

#[test]
fn stopping_discards_elapsed_time() {
    let mut playback = Playback::new(Config::new(Duration::from_millis(500), TrailSize::NONE));
    playback.start();

    let mut commands = Vec::new();
    playback.handle(&[elapsed(400)], &mut commands);
    playback.stop();
    playback.handle(&[elapsed(400)], &mut commands);
    assert!(commands.is_empty(), "stopped playback ignores time");

    playback.start();
    playback.handle(&[elapsed(400)], &mut commands);
    assert!(commands.is_empty(), "timer restarts on start");

    playback.handle(&[elapsed(100)], &mut commands);
    assert_eq!(commands.len(), 1);
}

#[test]
fn trail_change_requests_redecode_once() {
    let mut playback = Playback::new(Config::new(Duration::from_millis(100), TrailSize::NONE));
    let mut commands = Vec::new();

    playback.set_trail(TrailSize::new(5), &mut commands);
    playback.set_trail(TrailSize::new(5), &mut commands);
    assert_eq!(
        commands,
        vec![Command::Redecode {
            trail: TrailSize::new(5)
        }]
    );
    assert_eq!(playback.trail(), TrailSize::new(5));

    commands.clear();
    playback.start();
    playback.handle(&[elapsed(100)], &mut commands);
    assert_eq!(
        commands,
        vec![Command::Advance {
            trail: TrailSize::new(5)
        }]
    );
}

#[test]
fn ignores_unrelated_events() {
    let mut playback = Playback::new(Config::new(Duration::from_millis(100), TrailSize::NONE));
    playback.start();
    let mut commands = Vec::new();
    playback.handle(
        &[Event::GenerationDecoded {
            generation: life_trail_core::Generation {
                num: 1,
                cell_data: vec![0, 1],
            },
        }],
        &mut commands,
    );
    assert!(commands.is_empty());
}
