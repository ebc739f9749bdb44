pub mod export;
pub mod info;
pub mod render;
pub mod verify;
