pub(crate) mod player;
pub(crate) mod scroll_session;
