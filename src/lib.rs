pub mod audio;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod menu;
pub mod panel;
pub mod question;
pub mod session;
pub mod trackers;
