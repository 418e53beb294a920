//! Load command: run the loader over every file given on the command line.
//!
//! Files are processed concurrently on a shared [`Loader`]; module sources
//! are printed in input order once all tasks have finished.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use dusk::asset::variant::source_filename;
use dusk::config::{ConfigFile, LoaderOptions, find_config_file};
use dusk::utils::path::normalize_path;
use dusk::{FsHost, HostContext, Loader, Resolution, debug, log};
use tokio::task::JoinSet;

use super::Cli;

/// Config file name looked up when `--config` is not given.
const DEFAULT_CONFIG: &str = "dusk.toml";

/// Entry point of the binary.
pub async fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let failed = run_in(cli, &cwd, &mut io::stdout().lock()).await?;

    if failed > 0 {
        bail!("{failed} of {} files failed", cli.files.len());
    }
    Ok(())
}

/// Load every file of `cli` relative to `cwd`, writing sources to `out`.
///
/// Returns the number of files that failed.
pub async fn run_in(cli: &Cli, cwd: &Path, out: &mut impl Write) -> Result<usize> {
    let (root, options) = resolve_options(cli, cwd)?;
    let output_dir = root.join(&cli.output);
    let loader = Arc::new(Loader::new(options)?);

    debug!("load"; "root {}, output {}", root.display(), output_dir.display());

    let mut tasks = JoinSet::new();
    for (index, file) in cli.files.iter().enumerate() {
        let loader = Arc::clone(&loader);
        let resource = normalize_path(&cwd.join(file));
        let host = FsHost::new(&root, &resource, &output_dir);
        tasks.spawn(async move {
            let result = load_file(&loader, &host).await;
            (index, resource, result)
        });
    }

    let mut results: Vec<Option<(PathBuf, Result<Resolution>)>> =
        std::iter::repeat_with(|| None).take(cli.files.len()).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, resource, result) = joined.context("loader task panicked")?;
        results[index] = Some((resource, result));
    }

    let multiple = cli.files.len() > 1;
    let mut failed = 0;
    for (resource, result) in results.into_iter().flatten() {
        let name = source_filename(&root, &resource);
        match result {
            Ok(resolution) => {
                if multiple {
                    writeln!(out, "// {name}")?;
                }
                writeln!(out, "{}", resolution.source)?;
            }
            Err(err) => {
                failed += 1;
                log!("error"; "{name}: {err:#}");
            }
        }
    }
    out.flush()?;

    Ok(failed)
}

/// Read one resource from disk and run the loader on it.
async fn load_file(loader: &Loader, host: &FsHost) -> Result<Resolution> {
    let resource = host.resource_path();
    let content = tokio::fs::read(resource)
        .await
        .with_context(|| format!("failed to read {}", resource.display()))?;
    Ok(loader.resolve(host, &content).await?)
}

/// Locate the config file, pick the root context and apply CLI overrides.
fn resolve_options(cli: &Cli, cwd: &Path) -> Result<(PathBuf, LoaderOptions)> {
    let config_path = find_config_file(&cli.config, cwd);
    if config_path.is_none() && cli.config != Path::new(DEFAULT_CONFIG) {
        bail!("config file not found: {}", cli.config.display());
    }

    let root = match (&cli.root, &config_path) {
        (Some(root), _) => cwd.join(root),
        (None, Some(path)) => path.parent().unwrap_or(cwd).to_path_buf(),
        (None, None) => cwd.to_path_buf(),
    };
    let root = normalize_path(&root);

    let file = match &config_path {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            ConfigFile::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    let mut options = file.into_options()?;
    if cli.no_emit {
        options.emit_file = false;
    }
    if cli.commonjs {
        options.es_module = false;
    }
    Ok((root, options))
}
