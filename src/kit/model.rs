//! Drum kit records
//!
//! The computed parts of a kit (instrument ids, names and layers) plus the
//! fixed fields every Hydrogen kit carries. The fixed fields live in two
//! template records, [`KitInfo`] and [`InstrumentDefaults`], which are
//! cloned as they are and never vary per instrument.

use serde::{Deserialize, Serialize};

use crate::layering::VelocityRange;

/// One sample assigned to a velocity window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    /// File name inside the kit folder
    pub filename: String,
    pub min: f64,
    pub max: f64,
}

impl Layer {
    pub fn new(filename: impl Into<String>, range: VelocityRange) -> Self {
        Self {
            filename: filename.into(),
            min: range.min,
            max: range.max,
        }
    }
}

/// One playable sound of the kit, built from one sample folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instrument {
    pub id: u32,
    pub name: String,
    pub layers: Vec<Layer>,
}

/// The single drumkit component of a kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    pub id: u32,
    pub name: String,
    pub volume: f64,
}

impl Default for Component {
    fn default() -> Self {
        Self {
            id: 0,
            name: "Main".to_string(),
            volume: 1.0,
        }
    }
}

/// Header fields of the kit document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitInfo {
    pub author: String,
    pub info: String,
    pub license: String,
    pub image: String,
    pub image_license: String,
    pub component: Component,
}

impl Default for KitInfo {
    fn default() -> Self {
        Self {
            author: String::new(),
            info: String::new(),
            license: "undefined license".to_string(),
            image: String::new(),
            image_license: "undefined license".to_string(),
            component: Component::default(),
        }
    }
}

/// Synthesis parameters shared by every instrument of a kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentDefaults {
    pub volume: f64,
    pub is_muted: bool,
    pub pan_l: f64,
    pub pan_r: f64,
    pub random_pitch_factor: f64,
    pub gain: f64,
    pub apply_velocity: bool,
    pub filter_active: bool,
    pub filter_cutoff: f64,
    pub filter_resonance: f64,
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
    pub mute_group: i32,
    pub midi_out_channel: i32,
    pub midi_out_note: i32,
    pub is_stop_note: bool,
    pub sample_selection_algo: String,
    pub is_hihat: i32,
    pub lower_cc: i32,
    pub higher_cc: i32,
    pub fx_levels: [f64; 4],
    /// Gain of the instrument's component
    pub component_gain: f64,
    /// Gain applied to every layer
    pub layer_gain: f64,
    /// Pitch shift applied to every layer
    pub layer_pitch: f64,
}

impl Default for InstrumentDefaults {
    fn default() -> Self {
        Self {
            volume: 1.0,
            is_muted: false,
            pan_l: 1.0,
            pan_r: 1.0,
            random_pitch_factor: 0.0,
            gain: 1.0,
            apply_velocity: true,
            filter_active: false,
            filter_cutoff: 1.0,
            filter_resonance: 0.0,
            attack: 0.0,
            decay: 0.0,
            sustain: 1.0,
            release: 1000.0,
            mute_group: -1,
            midi_out_channel: -1,
            midi_out_note: 60,
            is_stop_note: false,
            sample_selection_algo: "VELOCITY".to_string(),
            is_hihat: -1,
            lower_cc: 0,
            higher_cc: 127,
            fx_levels: [0.0; 4],
            component_gain: 1.0,
            layer_gain: 1.0,
            layer_pitch: 0.0,
        }
    }
}

/// A complete kit, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrumkitDocument {
    pub name: String,
    pub info: KitInfo,
    pub defaults: InstrumentDefaults,
    pub instruments: Vec<Instrument>,
}

impl DrumkitDocument {
    /// Create a document with the stock header and instrument defaults.
    pub fn new(name: impl Into<String>, instruments: Vec<Instrument>) -> Self {
        Self {
            name: name.into(),
            info: KitInfo::default(),
            defaults: InstrumentDefaults::default(),
            instruments,
        }
    }

    pub fn with_info(mut self, info: KitInfo) -> Self {
        self.info = info;
        self
    }

    pub fn with_defaults(mut self, defaults: InstrumentDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Total number of layers across all instruments.
    pub fn layer_count(&self) -> usize {
        self.instruments.iter().map(|i| i.layers.len()).sum()
    }
}
