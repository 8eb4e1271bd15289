use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use bitflags::bitflags;
use sdl2::{event::Event, keyboard::Keycode, EventPump};
use tracing::trace;

use crate::events::{GameCommand, GameEvent};

bitflags! {
    /// Movement keys currently held down. The last press or release of a key wins.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const RIGHT = 1 << 0;
        const LEFT = 1 << 1;
        const DOWN = 1 << 2;
    }
}

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Tracked for as long as the key is down.
    Hold(HeldKeys),
    /// Fired once per press.
    Command(GameCommand),
}

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, KeyAction>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert(Keycode::D, KeyAction::Hold(HeldKeys::RIGHT));
        key_bindings.insert(Keycode::A, KeyAction::Hold(HeldKeys::LEFT));
        key_bindings.insert(Keycode::S, KeyAction::Hold(HeldKeys::DOWN));
        key_bindings.insert(Keycode::W, KeyAction::Command(GameCommand::Jump));

        // Game actions
        key_bindings.insert(Keycode::P, KeyAction::Command(GameCommand::TogglePause));
        key_bindings.insert(Keycode::Space, KeyAction::Command(GameCommand::ToggleDebug));
        #[cfg(not(target_os = "emscripten"))]
        {
            key_bindings.insert(Keycode::Escape, KeyAction::Command(GameCommand::Exit));
            key_bindings.insert(Keycode::Q, KeyAction::Command(GameCommand::Exit));
        }

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn get(&self, key: Keycode) -> Option<KeyAction> {
        self.key_bindings.get(&key).copied()
    }
}

/// A key press or release with repeats already filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKeyEvent {
    KeyDown(Keycode),
    KeyUp(Keycode),
}

/// Applies key events to the held-key flags and collects the commands they trigger.
pub fn process_simple_key_events(bindings: &Bindings, held: &mut HeldKeys, events: &[SimpleKeyEvent]) -> Vec<GameEvent> {
    let mut emitted = Vec::new();

    for event in events {
        match *event {
            SimpleKeyEvent::KeyDown(key) => match bindings.get(key) {
                Some(KeyAction::Hold(flag)) => held.insert(flag),
                Some(KeyAction::Command(command)) => emitted.push(GameEvent::Command(command)),
                None => {}
            },
            SimpleKeyEvent::KeyUp(key) => {
                if let Some(KeyAction::Hold(flag)) = bindings.get(key) {
                    held.remove(flag);
                }
            }
        }
    }

    emitted
}

pub fn input_system(
    bindings: Res<Bindings>,
    mut held: ResMut<HeldKeys>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    let mut key_events = Vec::new();

    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => key_events.push(SimpleKeyEvent::KeyDown(key)),
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => key_events.push(SimpleKeyEvent::KeyUp(key)),
            _ => {}
        }
    }

    if key_events.is_empty() {
        return;
    }

    trace!(count = key_events.len(), "Processing key events");
    for event in process_simple_key_events(&bindings, &mut held, &key_events) {
        writer.write(event);
    }
}
