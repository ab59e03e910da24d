pub mod renderer;
pub mod scene;
pub mod state;
