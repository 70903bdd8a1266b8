//! Clipboard copy boundary.
//!
//! The generation core has no knowledge of this module; callers forward the
//! most recently generated password here.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::Error;

/// Owns the platform clipboard connection.
pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn new() -> Result<Self, Error> {
        let ctx =
            ClipboardContext::new().map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;
        Ok(Self { ctx })
    }

    /// Copy text to the system clipboard.
    pub fn copy(&mut self, text: &str) -> Result<(), Error> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;

        // Reading back realizes the paste buffer on X11; zeroize the copy.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }

        Ok(())
    }
}
