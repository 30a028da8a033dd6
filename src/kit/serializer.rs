//! Hydrogen `drumkit.xml` output
//!
//! Writes a [`DrumkitDocument`] in the layout Hydrogen's drumkit loader
//! reads. Element order matters to older Hydrogen releases and is kept
//! fixed.

use std::fmt::{self, Write};

use crate::kit::model::{DrumkitDocument, Instrument, InstrumentDefaults, KitInfo, Layer};

const NAMESPACE: &str = "http://www.hydrogen-music.org/drumkit";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Render the whole document.
pub fn serialize(document: &DrumkitDocument) -> String {
    let mut xml = String::new();
    write_document(&mut xml, document).expect("writing to a String cannot fail");
    xml
}

/// Escape text for use as element content.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_document(out: &mut String, document: &DrumkitDocument) -> fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<drumkit_info xmlns="{}" xmlns:xsi="{}">"#,
        NAMESPACE, XSI_NAMESPACE
    )?;
    element(out, 1, "name", &escape(&document.name))?;
    write_info(out, &document.info)?;

    writeln!(out, "\t<instrumentList>")?;
    for instrument in &document.instruments {
        write_instrument(out, instrument, &document.defaults)?;
    }
    writeln!(out, "\t</instrumentList>")?;
    writeln!(out, "</drumkit_info>")
}

fn write_info(out: &mut String, info: &KitInfo) -> fmt::Result {
    element(out, 1, "author", &escape(&info.author))?;
    element(out, 1, "info", &escape(&info.info))?;
    element(out, 1, "license", &escape(&info.license))?;
    element(out, 1, "image", &escape(&info.image))?;
    element(out, 1, "imageLicense", &escape(&info.image_license))?;

    writeln!(out, "\t<componentList>")?;
    writeln!(out, "\t\t<drumkitComponent>")?;
    element(out, 3, "id", info.component.id)?;
    element(out, 3, "name", &escape(&info.component.name))?;
    element(out, 3, "volume", info.component.volume)?;
    writeln!(out, "\t\t</drumkitComponent>")?;
    writeln!(out, "\t</componentList>")
}

fn write_instrument(
    out: &mut String,
    instrument: &Instrument,
    defaults: &InstrumentDefaults,
) -> fmt::Result {
    const DEPTH: usize = 3;

    writeln!(out, "\t\t<instrument>")?;
    element(out, DEPTH, "id", instrument.id)?;
    element(out, DEPTH, "name", &escape(&instrument.name))?;
    element(out, DEPTH, "volume", defaults.volume)?;
    element(out, DEPTH, "isMuted", defaults.is_muted)?;
    element(out, DEPTH, "pan_L", defaults.pan_l)?;
    element(out, DEPTH, "pan_R", defaults.pan_r)?;
    element(out, DEPTH, "randomPitchFactor", defaults.random_pitch_factor)?;
    element(out, DEPTH, "gain", defaults.gain)?;
    element(out, DEPTH, "applyVelocity", defaults.apply_velocity)?;
    element(out, DEPTH, "filterActive", defaults.filter_active)?;
    element(out, DEPTH, "filterCutoff", defaults.filter_cutoff)?;
    element(out, DEPTH, "filterResonance", defaults.filter_resonance)?;
    element(out, DEPTH, "Attack", defaults.attack)?;
    element(out, DEPTH, "Decay", defaults.decay)?;
    element(out, DEPTH, "Sustain", defaults.sustain)?;
    element(out, DEPTH, "Release", defaults.release)?;
    element(out, DEPTH, "muteGroup", defaults.mute_group)?;
    element(out, DEPTH, "midiOutChannel", defaults.midi_out_channel)?;
    element(out, DEPTH, "midiOutNote", defaults.midi_out_note)?;
    element(out, DEPTH, "isStopNote", defaults.is_stop_note)?;
    element(
        out,
        DEPTH,
        "sampleSelectionAlgo",
        &escape(&defaults.sample_selection_algo),
    )?;
    element(out, DEPTH, "isHihat", defaults.is_hihat)?;
    element(out, DEPTH, "lower_cc", defaults.lower_cc)?;
    element(out, DEPTH, "higher_cc", defaults.higher_cc)?;
    for (i, level) in defaults.fx_levels.iter().enumerate() {
        element(out, DEPTH, &format!("FX{}Level", i + 1), level)?;
    }

    writeln!(out, "\t\t\t<instrumentComponent>")?;
    element(out, DEPTH + 1, "component_id", 0)?;
    element(out, DEPTH + 1, "gain", defaults.component_gain)?;
    for layer in &instrument.layers {
        write_layer(out, layer, defaults)?;
    }
    writeln!(out, "\t\t\t</instrumentComponent>")?;
    writeln!(out, "\t\t</instrument>")
}

fn write_layer(out: &mut String, layer: &Layer, defaults: &InstrumentDefaults) -> fmt::Result {
    const DEPTH: usize = 5;

    writeln!(out, "\t\t\t\t<layer>")?;
    element(out, DEPTH, "filename", &escape(&layer.filename))?;
    element(out, DEPTH, "min", layer.min)?;
    element(out, DEPTH, "max", layer.max)?;
    element(out, DEPTH, "gain", defaults.layer_gain)?;
    element(out, DEPTH, "pitch", defaults.layer_pitch)?;
    writeln!(out, "\t\t\t\t</layer>")
}

fn element(out: &mut String, depth: usize, tag: &str, value: impl fmt::Display) -> fmt::Result {
    for _ in 0..depth {
        out.push('\t');
    }
    writeln!(out, "<{tag}>{value}</{tag}>")
}
