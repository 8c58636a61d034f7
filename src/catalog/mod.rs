//! Track catalog loading
//!
//! A catalog is an XML file with one `<track>` element per entry:
//!
//! ```xml
//! <catalog>
//!   <track>
//!     <title>So What</title>
//!     <artist>Miles Davis</artist>
//!     <duration>562</duration>
//!     <rating>5</rating>
//!     <tag>Jazz</tag>
//!   </track>
//! </catalog>
//! ```

mod reader;
mod record;

pub use reader::read_catalog;
pub use record::CatalogRecord;

use crate::model::{IdGenerator, Library};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a catalog file into a library, drawing ids from `ids`
pub fn parse_catalog(path: &Path, ids: &IdGenerator) -> Result<Library> {
    log::info!("Reading track catalog from {:?}", path);

    let file =
        File::open(path).with_context(|| format!("Failed to open track catalog: {:?}", path))?;

    read_catalog(BufReader::new(file), ids)
        .with_context(|| format!("Failed to read track catalog: {:?}", path))
}
