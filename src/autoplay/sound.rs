//! Scoped click-sound override.

use std::ops::{Deref, DerefMut};

use super::provider::GameState;

/// Mutes the click sound for as long as the guard lives.
///
/// The previous setting is restored on drop, which also covers unwinding
/// out of a panicking command.
pub struct MutedClickSound<'a, G: GameState + ?Sized> {
    game: &'a mut G,
    previous: bool,
}

impl<'a, G: GameState + ?Sized> MutedClickSound<'a, G> {
    /// Mute the click sound on `game`.
    pub fn new(game: &'a mut G) -> Self {
        let previous = game.click_sound_enabled();
        game.set_click_sound(false);
        Self { game, previous }
    }
}

impl<G: GameState + ?Sized> Deref for MutedClickSound<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.game
    }
}

impl<G: GameState + ?Sized> DerefMut for MutedClickSound<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.game
    }
}

impl<G: GameState + ?Sized> Drop for MutedClickSound<'_, G> {
    fn drop(&mut self) {
        self.game.set_click_sound(self.previous);
    }
}

/// Run `command` with the click sound muted.
pub fn with_click_sound_muted<G, T>(game: &mut G, command: impl FnOnce(&mut G) -> T) -> T
where
    G: GameState + ?Sized,
{
    let mut muted = MutedClickSound::new(game);
    command(&mut *muted)
}
