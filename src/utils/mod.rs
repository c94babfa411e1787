pub mod clock;
pub mod colors;
pub mod date;
pub mod formats;
pub mod logging;
pub mod path;
pub mod time;
