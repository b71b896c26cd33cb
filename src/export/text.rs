//! Text export: the model's golden serialization, written verbatim.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::model::Animation;

/// Render the textual description.
pub fn render(animation: &Animation) -> String {
    animation.to_string()
}

/// Write the textual description to `sink`.
pub fn write_to(animation: &Animation, sink: &mut impl Write) -> Result<()> {
    sink.write_all(render(animation).as_bytes())?;
    Ok(())
}

/// Write the textual description to a file, replacing any existing one.
pub fn export(animation: &Animation, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, render(animation))?;
    Ok(())
}
