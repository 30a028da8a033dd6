//! Instrument assembly
//!
//! Builds one instrument per sample folder: picks the folder's samples,
//! spreads the velocity range over them and has each picked sample placed
//! in the kit folder before a layer refers to it.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::KitConfig;
use crate::error::{KitError, Result};
use crate::kit::model::{DrumkitDocument, Instrument, Layer};
use crate::kit::tree::{scan, SampleDir};
use crate::layering::{partition, select};
use crate::materialize::{destination_name, ensure_sample, Materializer};

/// Turn scanned folders into instruments.
///
/// `dirs` must be in post-order as returned by [`scan`]; ids follow that
/// order and only count folders that yield an instrument.
///
/// # Errors
/// Fails with [`KitError::NoSamplesFound`] when no folder yields an
/// instrument, and with the materializer's error as soon as one sample
/// cannot be placed.
pub fn assemble(
    dirs: &[SampleDir],
    config: &KitConfig,
    kit_dir: &Path,
    materializer: &dyn Materializer,
) -> Result<Vec<Instrument>> {
    let mut instruments = Vec::new();
    let mut names = HashSet::new();
    let mut destinations: HashMap<PathBuf, PathBuf> = HashMap::new();

    for dir in dirs {
        if dir.is_empty() {
            continue;
        }

        let files = select(&dir.files, &config.input_extension, config.max_layers);
        if files.is_empty() {
            debug!("No {} samples in {}", config.input_extension, dir.path.display());
            continue;
        }

        let ranges = partition(files.len(), config.interleave);

        let mut layers = Vec::with_capacity(files.len());
        for (file, range) in files.iter().zip(ranges) {
            let source = dir.path.join(file);
            let filename = destination_name(file, config.output_extension.as_deref());
            let destination = kit_dir.join(&filename);

            if let Some(previous) = destinations.insert(destination.clone(), source.clone()) {
                warn!(
                    "{} and {} both end up as {}",
                    previous.display(),
                    source.display(),
                    destination.display()
                );
            }

            ensure_sample(materializer, &source, &destination)?;
            layers.push(Layer::new(filename, range));
        }

        let root_name = dir
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = config.naming.instrument_name(&dir.relative, &root_name);
        if name.is_empty() {
            warn!("Instrument from {} has an empty name", dir.path.display());
        } else if !names.insert(name.clone()) {
            warn!("Instrument name '{}' is used more than once", name);
        }

        let id = instruments.len() as u32;
        info!("Instrument {}: '{}' with {} layers", id, name, layers.len());
        instruments.push(Instrument { id, name, layers });
    }

    if instruments.is_empty() {
        return Err(KitError::NoSamplesFound);
    }

    Ok(instruments)
}

/// Scan `root` and build the whole kit document.
pub fn build_document(
    root: &Path,
    name: &str,
    config: &KitConfig,
    kit_dir: &Path,
    materializer: &dyn Materializer,
) -> Result<DrumkitDocument> {
    let dirs = scan(root)?;
    let instruments = assemble(&dirs, config, kit_dir, materializer)?;

    Ok(DrumkitDocument::new(name, instruments)
        .with_info(config.info.clone())
        .with_defaults(config.instrument_defaults.clone()))
}
