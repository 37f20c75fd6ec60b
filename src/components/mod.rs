mod whiteboard;
pub use whiteboard::*;

mod brush_setting;
pub use brush_setting::*;

mod stroke_settings;
pub use stroke_settings::*;
