//! Clean generated output

use anyhow::Result;
use std::fs;

use crate::Pagegen;

/// Remove the public directory
pub fn run(app: &Pagegen) -> Result<()> {
    if app.public_dir.exists() {
        fs::remove_dir_all(&app.public_dir)?;
        tracing::info!("Removed {:?}", app.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_public_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let app = Pagegen::new(tmp.path()).unwrap();

        fs::create_dir_all(app.public_dir.join("tags")).unwrap();
        run(&app).unwrap();
        assert!(!app.public_dir.exists());

        // A second clean is a no-op
        run(&app).unwrap();
    }
}
