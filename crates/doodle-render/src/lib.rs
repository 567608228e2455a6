pub mod paint;
pub mod painter;
pub mod raster;

pub use paint::ScenePainter;
pub use painter::{FrameInput, Painter, Pen, paint_frame};
pub use raster::{RasterPainter, render_snapshot};
