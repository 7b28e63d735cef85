pub mod absorb;
pub mod configure;
pub mod describe;
pub mod transition;
