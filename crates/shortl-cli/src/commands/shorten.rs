//! The shorten command

use std::path::Path;
use std::sync::Arc;

use shortl_core::{Provider, ScriptProvider, Shortener};

use crate::error::Result;

/// Run the shorten command.
///
/// With `--script`, the file is compiled to an ad-hoc provider and
/// dispatched directly; nothing is registered. Otherwise the named provider
/// is resolved through the registry.
pub async fn run_shorten(
    shortener: &Shortener,
    url: &str,
    provider: &str,
    script: Option<&Path>,
) -> Result<()> {
    let short = match script {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            let compiled: Arc<dyn Provider> = Arc::new(ScriptProvider::compile(&source)?);
            shortener.shorten(url, compiled).await?
        }
        None => shortener.shorten(url, provider).await?,
    };
    println!("{short}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn script_file_is_dispatched_ad_hoc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tag.provider");
        fs::write(&path, "fn tag(url) { \"x-\" + url }").unwrap();

        let shortener = Shortener::new().unwrap();
        run_shorten(&shortener, "abc", "isgd", Some(&path))
            .await
            .unwrap();
        // ad-hoc dispatch leaves the registry untouched
        assert!(shortener.list_custom().is_empty());
    }

    #[tokio::test]
    async fn missing_script_file_is_an_io_error() {
        let shortener = Shortener::new().unwrap();
        let err = run_shorten(
            &shortener,
            "abc",
            "isgd",
            Some(Path::new("/nonexistent/file.provider")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, crate::error::CliError::Io(_)));
    }

    #[tokio::test]
    async fn unknown_provider_surfaces_core_error() {
        let shortener = Shortener::new().unwrap();
        let err = run_shorten(&shortener, "abc", "doesnotexist", None)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::CliError::Core(_)));
    }
}
