// File: src/persistence.rs
use crate::core::types::{Lexicon, Wrestler};
use crate::error::{HaikuError, Result};
use crate::social::HashtagTable;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const WRESTLERS_FILE: &str = "wrestlers.json";
pub const ERAS_FILE: &str = "eras.json";
pub const SHOWS_FILE: &str = "shows.json";
pub const TROPES_FILE: &str = "tropes.json";
pub const OBJECTS_FILE: &str = "objects.json";
pub const PIVOTS_FILE: &str = "pivots.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| HaikuError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| HaikuError::json(path, e))
}

/// Loads the six lexicon files from `dir`. Every file must exist; each may
/// hold an empty array.
pub fn load_lexicon_dir(dir: &Path) -> Result<Lexicon> {
    let wrestlers: Vec<Wrestler> = read_json(&dir.join(WRESTLERS_FILE))?;
    let lexicon = Lexicon {
        wrestlers,
        eras: read_json(&dir.join(ERAS_FILE))?,
        shows: read_json(&dir.join(SHOWS_FILE))?,
        tropes: read_json(&dir.join(TROPES_FILE))?,
        objects: read_json(&dir.join(OBJECTS_FILE))?,
        pivots: read_json(&dir.join(PIVOTS_FILE))?,
    };
    log::info!(
        "loaded lexicon from {}: {} wrestlers, {} tropes, {} objects, {} pivots",
        dir.display(),
        lexicon.wrestlers.len(),
        lexicon.tropes.len(),
        lexicon.objects.len(),
        lexicon.pivots.len()
    );
    Ok(lexicon)
}

/// Writes the whole lexicon as one bincode file. The write goes to a temp
/// file next to `path` and is renamed into place.
pub fn save_bundle(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| HaikuError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| HaikuError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, lexicon)?;
        writer.flush().map_err(|e| HaikuError::io(temp_file.path(), e))?;
    }

    temp_file.persist(path)?;
    log::info!("wrote lexicon bundle to {}", path.display());
    Ok(())
}

pub fn load_bundle(path: &Path) -> Result<Lexicon> {
    let file = File::open(path).map_err(|e| HaikuError::io(path, e))?;
    let lexicon: Lexicon = bincode::deserialize_from(BufReader::new(file))?;
    log::info!("loaded lexicon bundle {} ({} wrestlers)", path.display(), lexicon.wrestlers.len());
    Ok(lexicon)
}

/// A replacement hashtag table. Categories missing from the file are empty.
pub fn load_hashtag_table(path: &Path) -> Result<HashtagTable> {
    let table: HashtagTable = read_json(path)?;
    log::info!(
        "loaded hashtag table {}: {} shows, {} eras, {} wrestlers",
        path.display(),
        table.shows.len(),
        table.eras.len(),
        table.wrestlers.len()
    );
    Ok(table)
}
