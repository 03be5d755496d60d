//! Stub command handlers. Each one should eventually perform a real system
//! action (media control); for now they print what would happen.

use crate::matcher::{CommandName, CommandRegistry, HandlerResult};

pub fn stop_music() -> HandlerResult {
    println!("[EXEC] stop_music() → Stopping playback");
    Ok(())
}

pub fn start_music() -> HandlerResult {
    println!("[EXEC] start_music() → Starting playback");
    Ok(())
}

pub fn play_song(title: &str, artist: Option<&str>) -> HandlerResult {
    match artist {
        Some(artist) => println!("[EXEC] play_song() → Playing '{title}' by {artist}"),
        None => println!("[EXEC] play_song() → Playing '{title}'"),
    }
    Ok(())
}

/// Default registry wiring. `next_track`, `previous_track`, `volume_up` and
/// `volume_down` have rules but no handler yet, so their speech resolves to
/// no match until someone implements them.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register_simple(CommandName::StopMusic, stop_music);
    registry.register_simple(CommandName::StartMusic, start_music);
    registry.register_title_artist(CommandName::PlaySong, play_song);
    registry
}
