pub mod app;
mod board;
mod dialogs;
mod hud;
mod selector;
mod state;
mod textures;
