/// Settings file looked up next to the program when `--settings` is omitted
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Fixed working file used by `--debug` runs
pub const DEBUG_WORKING_FILENAME: &str = "temp.pdf";

/// Placeholder replaced by the final output path in launcher templates
pub const FILENAME_PLACEHOLDER: &str = "{FILENAME}";

/// Default overlay font (one of the standard 14 PDF fonts)
pub const DEFAULT_FONT_FACE: &str = "Helvetica";

/// Default overlay font size in points
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

/// Default overlay rotation in degrees
pub const DEFAULT_TEXT_ROTATION: f32 = 0.0;

/// Default overlay position in points from the bottom-left corner
pub const DEFAULT_TEXT_X: f32 = 0.0;
pub const DEFAULT_TEXT_Y: f32 = 0.0;

/// Overlay canvas size in mm (A4 portrait)
pub const CANVAS_WIDTH_MM: f32 = 210.0;
pub const CANVAS_HEIGHT_MM: f32 = 297.0;
