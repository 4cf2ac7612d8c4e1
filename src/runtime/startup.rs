use crate::presentation::Presentation;
use crate::registry::{self, FolderRegistry};
use crate::session::PlayerSession;

/// Build the session from the persisted folder registry and scan every
/// remembered folder, in registry order, into the playlist.
pub fn restore_session(present: &mut dyn Presentation) -> PlayerSession {
    let state_path = registry::resolve_state_path();

    let folder_registry = match &state_path {
        Some(path) => registry::load(path),
        None => {
            tracing::warn!("no config location available; folder registry will not persist");
            FolderRegistry::new()
        }
    };

    let mut session = PlayerSession::new(folder_registry, state_path);
    session.load_registered(present);
    session
}
