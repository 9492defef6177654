//! UI Components

pub mod animated_background;
pub mod navbar;

pub use animated_background::AnimatedBackground;
pub use navbar::Navbar;
