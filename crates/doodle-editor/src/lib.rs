pub mod canvas;
pub mod input;
pub mod tools;
pub mod widget;

pub use canvas::DoodleCanvas;
pub use input::{InputEvent, Phase};
pub use widget::{Size, Widget};
