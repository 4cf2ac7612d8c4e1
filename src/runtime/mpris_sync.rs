use crate::mpris::MprisHandle;
use crate::session::PlayerSession;

pub fn update_mpris(mpris: &MprisHandle, session: &PlayerSession) {
    mpris.set_track(session.current_track());
    mpris.set_playback(session.playback);
}
