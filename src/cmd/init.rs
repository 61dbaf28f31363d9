//! Init command implementation
//!
//! Handles the `dockershrink init` command which stores the dockershrink API
//! key in the per-user config file.

use anyhow::Result;
use console::style;

use crate::config::{CredentialStore, FileCredentialStore};
use crate::fmt::{Glyphs, CHECKMARK};

/// Save `api_key` to `~/.dsconfig.json`, replacing any previous key
///
/// # Examples
///
/// ```no_run
/// use dockershrink::cmd::init::cmd_init;
/// use dockershrink::fmt::Glyphs;
///
/// cmd_init("ds_live_123", Glyphs::new(true))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(api_key: &str, glyphs: Glyphs) -> Result<()> {
    let store = FileCredentialStore::user_default()?;
    save_api_key(&store, api_key)?;

    println!("{} API key saved successfully.", glyphs.pick(CHECKMARK));
    println!(
        "   Run {} in your project directory next.",
        style("dockershrink optimize").cyan()
    );
    Ok(())
}

/// Store `api_key` through any credential store
pub fn save_api_key(store: &dyn CredentialStore, api_key: &str) -> Result<()> {
    store.save(api_key.trim())?;
    Ok(())
}
