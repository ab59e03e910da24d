pub mod blink;
pub mod ease;
pub mod gaze;
