pub mod lookup;
pub mod render;
