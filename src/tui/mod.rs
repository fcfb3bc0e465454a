//! Interactive list view over the loaded conversation
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;

use crate::loader::StoreSource;
use terminal::TerminalGuard;

/// Load the conversation from `source` and browse it until the user quits
pub fn run_interactive(source: StoreSource) -> Result<()> {
    let mut app = App::new(source);
    let mut guard = TerminalGuard::enter()?;
    app.run(guard.terminal_mut())
}
