pub mod constants;
pub mod court;
pub mod lives;
pub mod round;
pub mod state;
pub mod systems;
