//! The `examtrack theme` command.

use anyhow::Result;

use examtrack_core::theme::Theme;

use crate::commands::Context;

pub fn execute(mut ctx: Context, theme: Option<Theme>) -> Result<()> {
    match theme {
        Some(theme) => {
            ctx.tracker.set_theme(theme)?;
            println!("Theme set to {theme}");
        }
        None => println!("{}", ctx.tracker.theme()),
    }
    Ok(())
}
