//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::cli::SourceArgs;
use crate::config::{hydrogen_data_dir, hydrogen_drumkits_dir, KitConfig, DRUMKIT_FILE};
use crate::error::{KitError, Result};
use crate::kit::{build_document, serialize, DrumkitDocument};
use crate::materialize::{DryRun, FileCopier, Materializer, SoxConverter};

/// Build a kit from `source` and write it under `output`, or under
/// Hydrogen's drumkits folder when no output is given.
///
/// Returns the path of the written `drumkit.xml`.
pub fn generate(source: &SourceArgs, output: Option<&Path>) -> Result<PathBuf> {
    generate_with(source, output, &env::var_os("PATH").unwrap_or_default())
}

/// [`generate`], looking for the converter in the folders of `search_path`.
pub fn generate_with(
    source: &SourceArgs,
    output: Option<&Path>,
    search_path: &OsStr,
) -> Result<PathBuf> {
    let config = source.kit_config()?;
    let name = source.kit_name()?;

    // Check everything that can be checked before touching any file
    let materializer = materializer_for(&config, search_path)?;
    let drumkits_dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => drumkits_dir_for(hydrogen_data_dir())?,
    };
    if !source.folder.is_dir() {
        return Err(KitError::SourceNotFound {
            path: source.folder.clone(),
        });
    }

    let kit_dir = create_kit_dir(&drumkits_dir, name)?;
    info!("Building kit '{}' in {}", name, kit_dir.display());

    let document = build_document(&source.folder, name, &config, &kit_dir, materializer.as_ref())?;
    let xml_path = write_document(&kit_dir, &document)?;

    println!(
        "Kit '{}': {} instruments, {} layers",
        document.name,
        document.instruments.len(),
        document.layer_count()
    );
    println!("Written: {}", xml_path.display());

    Ok(xml_path)
}

/// Print what `generate` would build, without writing anything.
pub fn plan(source: &SourceArgs) -> Result<DrumkitDocument> {
    let config = source.kit_config()?;
    let name = source.kit_name()?;

    let document = build_document(&source.folder, name, &config, Path::new(name), &DryRun)?;

    let json = serde_json::to_string_pretty(&document)?;
    println!("{}", json);

    Ok(document)
}

/// Pick how samples get into the kit folder.
///
/// Fails right away when conversion is requested and SoX is not in any
/// folder of `search_path`.
pub fn materializer_for(config: &KitConfig, search_path: &OsStr) -> Result<Box<dyn Materializer>> {
    if config.transcodes() {
        let converter = SoxConverter::locate_in(search_path)?;
        info!("Converting samples with {}", converter.program().display());
        Ok(Box::new(converter))
    } else {
        Ok(Box::new(FileCopier))
    }
}

/// Create (or reuse) the folder of kit `name` inside `drumkits_dir`.
pub fn create_kit_dir(drumkits_dir: &Path, name: &str) -> Result<PathBuf> {
    let kit_dir = drumkits_dir.join(name);
    fs::create_dir_all(&kit_dir).map_err(|e| KitError::DirectoryCreateError {
        path: kit_dir.clone(),
        source: e,
    })?;
    Ok(kit_dir)
}

/// Write `drumkit.xml` into `kit_dir`.
pub fn write_document(kit_dir: &Path, document: &DrumkitDocument) -> Result<PathBuf> {
    info!("Writing XML...");
    let xml_path = kit_dir.join(DRUMKIT_FILE);
    fs::write(&xml_path, serialize(document)).map_err(|e| KitError::FileWriteError {
        path: xml_path.clone(),
        source: e,
    })?;
    info!("Done.");
    Ok(xml_path)
}

/// Hydrogen's drumkits folder inside `data_dir`, which must exist.
pub fn drumkits_dir_for(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    let data_dir = data_dir.ok_or_else(|| KitError::InvalidConfig {
        reason: "cannot locate the home folder, use --output".to_string(),
    })?;
    if !data_dir.exists() {
        return Err(KitError::HydrogenDataNotFound { path: data_dir });
    }
    Ok(hydrogen_drumkits_dir(&data_dir))
}
