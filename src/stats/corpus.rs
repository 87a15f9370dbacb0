//! Review corpus loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;

/// Load a corpus stored as a JSON array of strings.
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reviews: Vec<String> = serde_json::from_reader(BufReader::new(file))?;

    log::debug!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}
