use std::collections::HashMap;

use super::rules::{Command, CommandName};

pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;
pub type HandlerResult = Result<(), HandlerError>;

/// A registered callable. Commands either take no arguments or, for
/// `play_song`, a title plus optional artist.
pub enum Handler {
    Simple(Box<dyn FnMut() -> HandlerResult>),
    TitleArtist(Box<dyn FnMut(&str, Option<&str>) -> HandlerResult>),
}

/// Maps canonical command names to handlers.
///
/// The registry is deliberately partial: a rule without an entry stays
/// recognizable speech that is not implemented yet, and resolves to no
/// match instead of erroring.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<CommandName, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_simple<F>(&mut self, name: CommandName, handler: F)
    where
        F: FnMut() -> HandlerResult + 'static,
    {
        self.handlers.insert(name, Handler::Simple(Box::new(handler)));
    }

    pub fn register_title_artist<F>(&mut self, name: CommandName, handler: F)
    where
        F: FnMut(&str, Option<&str>) -> HandlerResult + 'static,
    {
        self.handlers
            .insert(name, Handler::TitleArtist(Box::new(handler)));
    }

    pub fn contains(&self, name: CommandName) -> bool {
        self.handlers.contains_key(&name)
    }

    /// Invoke the handler for a resolved command. Returns `Ok(false)` when
    /// the name has no entry, or the entry's arity does not fit the
    /// command's payload. Handler errors propagate untouched.
    pub fn dispatch(&mut self, command: &Command) -> Result<bool, HandlerError> {
        let Some(handler) = self.handlers.get_mut(&command.name()) else {
            return Ok(false);
        };
        match (command, handler) {
            (Command::PlaySong { title, artist }, Handler::TitleArtist(f)) => {
                f(title.as_str(), artist.as_deref())?
            }
            (Command::PlaySong { .. }, Handler::Simple(_)) => return Ok(false),
            (_, Handler::TitleArtist(_)) => return Ok(false),
            (_, Handler::Simple(f)) => f()?,
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[test]
    fn unregistered_command_is_not_dispatched() {
        let mut registry = CommandRegistry::new();
        assert!(!registry.contains(CommandName::NextTrack));
        assert!(!registry.dispatch(&Command::NextTrack).unwrap());
    }

    #[test]
    fn simple_handler_is_invoked() {
        let count = Rc::new(Cell::new(0));
        let mut registry = CommandRegistry::new();
        let c = count.clone();
        registry.register_simple(CommandName::StopMusic, move || {
            c.set(c.get() + 1);
            Ok(())
        });

        assert!(registry.dispatch(&Command::StopMusic).unwrap());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn title_artist_handler_receives_extracted_args() {
        let seen: Rc<RefCell<Option<(String, Option<String>)>>> =
            Rc::new(RefCell::new(None));
        let mut registry = CommandRegistry::new();
        let s = seen.clone();
        registry.register_title_artist(CommandName::PlaySong, move |title, artist| {
            *s.borrow_mut() = Some((title.to_string(), artist.map(str::to_string)));
            Ok(())
        });

        let command = Command::PlaySong {
            title: "La Bamba".into(),
            artist: Some("Ritchie Valens.".into()),
        };
        assert!(registry.dispatch(&command).unwrap());
        assert_eq!(
            *seen.borrow(),
            Some(("La Bamba".into(), Some("Ritchie Valens.".into())))
        );
    }

    #[test]
    fn arity_mismatch_counts_as_unregistered() {
        let mut registry = CommandRegistry::new();
        registry.register_simple(CommandName::PlaySong, || Ok(()));
        let command = Command::PlaySong {
            title: "Imagine".into(),
            artist: None,
        };
        assert!(!registry.dispatch(&command).unwrap());
    }

    #[test]
    fn handler_errors_propagate() {
        let mut registry = CommandRegistry::new();
        registry.register_simple(CommandName::StartMusic, || Err("player offline".into()));
        assert!(registry.dispatch(&Command::StartMusic).is_err());
    }
}
