pub mod ai;
pub mod composer;
pub mod export;
pub mod fallback;
pub mod renderer;
