//! Natural-order sample selection
//!
//! Picks the samples that become an instrument's layers. When a directory
//! holds more samples than the layer cap, the list is thinned by linear
//! interpolation over the natural-ordered names, so the pick is
//! deterministic and always ends with the last sample.

use std::num::NonZeroUsize;
use std::path::Path;

/// Default maximum number of layers per instrument.
pub const DEFAULT_MAX_LAYERS: usize = 16;

/// Check whether `name` ends with exactly `extension` (dot included).
///
/// The comparison is case-sensitive. Dot files such as `.wav` have no
/// extension and never match.
pub fn has_extension(name: &str, extension: &str) -> bool {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => extension.strip_prefix('.') == Some(ext),
        None => false,
    }
}

/// Sort names in natural order.
///
/// Every name is left-padded with `'0'` to the length of the longest name
/// and the padded forms are compared, so `kick2.wav` comes before
/// `kick10.wav`. The sort is stable.
pub fn natural_sort(names: &mut [String]) {
    let width = names
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);

    names.sort_by_cached_key(|name| pad_left(name, width));
}

fn pad_left(name: &str, width: usize) -> String {
    let len = name.chars().count();
    let mut padded = String::with_capacity(width.max(len));
    padded.extend(std::iter::repeat('0').take(width.saturating_sub(len)));
    padded.push_str(name);
    padded
}

/// Select the samples of one instrument.
///
/// Keeps the names matching `extension`, orders them naturally and, when
/// there are more than `max_layers`, keeps `max_layers` of them picked at
/// zero-based indices `floor(n / k * i) - 1` for `i` in `1..=k`.
///
/// An empty result means the directory yields no instrument.
pub fn select<S: AsRef<str>>(
    files: &[S],
    extension: &str,
    max_layers: Option<NonZeroUsize>,
) -> Vec<String> {
    let mut selected: Vec<String> = files
        .iter()
        .map(|name| AsRef::<str>::as_ref(name))
        .filter(|name| has_extension(name, extension))
        .map(str::to_string)
        .collect();

    natural_sort(&mut selected);

    if let Some(max_layers) = max_layers {
        let n = selected.len();
        let k = max_layers.get();
        if n > k {
            // floor(delta * i) with delta = n / k, evaluated exactly
            selected = (1..=k)
                .map(|i| selected[n * i / k - 1].clone())
                .collect();
        }
    }

    selected
}
