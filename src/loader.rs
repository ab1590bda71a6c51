use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    time::Instant,
};

use flate2::read::GzDecoder;
use serde::Deserialize;

use crate::{document::DocumentRecord, error::Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "doc", default)]
    docs: Vec<FeedDoc>,
}

#[derive(Debug, Deserialize)]
struct FeedDoc {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(rename = "abstract", default)]
    text: String,
}

/// Load an abstract dump (`<feed><doc>…</doc></feed>`) from `path`.
///
/// Gzip-compressed files are detected by their magic bytes and
/// decompressed on the fly.
pub fn load_dump(path: &Path) -> Result<Vec<DocumentRecord>> {
    let start = Instant::now();
    let mut reader = BufReader::new(File::open(path)?);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    let records = if gzipped {
        read_dump(BufReader::new(GzDecoder::new(reader)))?
    } else {
        read_dump(reader)?
    };

    tracing::info!(
        path = %path.display(),
        gzipped,
        documents = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dump loaded"
    );
    Ok(records)
}

/// Decode an uncompressed dump. Records keep file order.
pub fn read_dump<R: BufRead>(reader: R) -> Result<Vec<DocumentRecord>> {
    let feed: Feed = quick_xml::de::from_reader(reader)?;
    Ok(feed
        .docs
        .into_iter()
        .map(|doc| DocumentRecord {
            title: doc.title,
            url: doc.url,
            text: doc.text,
        })
        .collect())
}
