//! Credits desktop: a cyclic sequence of fading pages with decorative
//! walkers along the bottom of the screen.

pub mod desktop;
pub mod kinds;
pub mod page;
pub mod script;
pub mod sequencer;
pub mod sprites;
pub mod state;

pub use desktop::CreditsDesktop;
