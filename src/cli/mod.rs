//! Terminal front end
//!
//! The welcome banner, the numbered main menu and the session loop that
//! dispatches menu choices to the prompting catalogues.

pub mod menu;
pub mod session;
