//! Value types for light control parameters.

mod brightness;
mod color;
mod infrared;
mod power;
mod selector;

pub use brightness::Brightness;
pub use color::Color;
pub use infrared::Infrared;
pub use power::PowerState;
pub use selector::Selector;
