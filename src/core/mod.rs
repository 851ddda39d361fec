// Core math shared by the game and engine layers

pub mod math;
