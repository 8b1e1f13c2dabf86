pub mod di;
pub mod events;
pub mod icon_codec;
pub mod netscape;
pub mod preferences;
pub mod repositories;
