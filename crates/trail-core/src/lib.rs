pub mod config;
pub mod constants;
pub mod follower;
pub mod input;
pub mod line;
pub mod oscillator;
pub mod particles;
pub mod scheduler;
pub mod surface;
pub mod system;

pub use config::*;
pub use follower::*;
pub use input::*;
pub use line::*;
pub use oscillator::*;
pub use particles::*;
pub use scheduler::*;
pub use surface::*;
pub use system::*;
