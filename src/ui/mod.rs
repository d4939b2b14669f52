pub mod controls;
pub mod hud;
pub mod menu;
