//! Catalog XML reader

use super::record::CatalogRecord;
use crate::model::{IdGenerator, Library};
use anyhow::{bail, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;

/// Read every `<track>` of a catalog into a library
///
/// Records that fail validation are logged and skipped; malformed XML is an error.
pub fn read_catalog<R: BufRead>(source: R, ids: &IdGenerator) -> Result<Library> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut library = Library::new();
    let mut current_record: Option<CatalogRecord> = None;
    let mut current_element = String::new();
    let mut current_text = String::new();
    let mut record_index = 0usize;
    let mut skipped = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name();
                match name.as_ref() {
                    b"track" => {
                        record_index += 1;
                        current_record = Some(CatalogRecord::new());
                    }
                    _ => {
                        // Track element name for text content
                        if current_record.is_some() {
                            current_element = String::from_utf8_lossy(name.as_ref()).to_string();
                            current_text.clear();
                        }
                    }
                }
            }

            Ok(Event::Text(e)) => {
                if current_record.is_some() && !current_element.is_empty() {
                    match e.unescape() {
                        Ok(text) => current_text.push_str(&text),
                        Err(err) => bail!(
                            "Catalog XML error at position {}: {}",
                            reader.buffer_position(),
                            err
                        ),
                    }
                }
            }

            Ok(Event::CData(e)) => {
                if current_record.is_some() && !current_element.is_empty() {
                    current_text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }

            Ok(Event::End(e)) => {
                let name = e.name();
                if name.as_ref() == b"track" {
                    // Record complete, validate it
                    if let Some(record) = current_record.take() {
                        match record.into_entry(ids) {
                            Ok(entry) => {
                                log::debug!("Catalog track {}: {}", record_index, entry);
                                library.add_track(entry);
                            }
                            Err(e) => {
                                log::warn!("Skipping catalog track {}: {:#}", record_index, e);
                                skipped += 1;
                            }
                        }
                    }
                } else if let Some(ref mut record) = current_record {
                    if !current_element.is_empty() {
                        record.set_field(&current_element, std::mem::take(&mut current_text));
                    }
                }
                current_element.clear();
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                bail!(
                    "Catalog XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                );
            }
            _ => {}
        }

        buf.clear();
    }

    log::info!(
        "Read {} tracks from catalog ({} skipped)",
        library.track_count(),
        skipped
    );
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<catalog>
  <track>
    <title>So What</title>
    <artist>Miles Davis</artist>
    <duration>562</duration>
    <rating>5</rating>
    <tag>Jazz</tag>
    <tag>Modal</tag>
  </track>
  <track>
    <title>   </title>
    <artist>Nobody</artist>
    <duration>100</duration>
    <rating>3</rating>
  </track>
  <track>
    <title>Rock &amp; Roll</title>
    <artist>Led Zeppelin</artist>
    <duration>220</duration>
    <rating>4</rating>
    <tag>rock</tag>
    <tag>Rock</tag>
  </track>
</catalog>
"#;

    #[test]
    fn test_read_catalog_skips_invalid_records() {
        let ids = IdGenerator::new();
        let lib = read_catalog(CATALOG.as_bytes(), &ids).unwrap();

        assert_eq!(lib.track_count(), 2);

        let tracks: Vec<_> = lib.tracks().collect();
        assert_eq!(
            tracks[0].to_string(),
            "[#1] Miles Davis - So What (562s) *****  [tags: Jazz, Modal]"
        );
        assert_eq!(tracks[1].title(), "Rock & Roll");
        assert_eq!(tracks[1].id().get(), 2);
        assert_eq!(tracks[1].tags().as_slice(), ["rock"]);
    }

    #[test]
    fn test_read_empty_catalog() {
        let ids = IdGenerator::new();
        let lib = read_catalog("<catalog/>".as_bytes(), &ids).unwrap();
        assert!(lib.is_empty());
    }

    #[test]
    fn test_read_cdata_fields() {
        let ids = IdGenerator::new();
        let xml = "<catalog><track>\
            <title><![CDATA[Rock & Roll]]></title>\
            <artist>Led Zeppelin</artist>\
            <duration>220</duration>\
            <rating>4</rating>\
            <tag><![CDATA[<Live>]]></tag>\
            </track></catalog>";

        let lib = read_catalog(xml.as_bytes(), &ids).unwrap();

        assert_eq!(lib.track_count(), 1);
        let track = lib.tracks().next().unwrap();
        assert_eq!(track.title(), "Rock & Roll");
        assert_eq!(track.tags().as_slice(), ["<Live>"]);
    }

    #[test]
    fn test_unknown_entity_reports_position() {
        let ids = IdGenerator::new();
        let xml = "<catalog><track><title>a&nbsp;b</title></track></catalog>";

        let err = read_catalog(xml.as_bytes(), &ids).unwrap_err();
        let message = format!("{:#}", err);

        assert!(message.starts_with("Catalog XML error at position "));
        assert!(message.contains("nbsp"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let ids = IdGenerator::new();
        let result = read_catalog("<catalog><track><title>x</artist></track>".as_bytes(), &ids);
        assert!(result.is_err());
    }
}
