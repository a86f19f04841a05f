pub mod constants;
pub mod easing;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod scroll;
pub mod sections;
pub mod spring;
pub mod stage;
pub mod surface;
pub mod waves;

pub use easing::*;
pub use error::*;
pub use field::*;
pub use frame_loop::*;
pub use scroll::*;
pub use spring::*;
pub use stage::*;
pub use surface::*;
pub use waves::*;
