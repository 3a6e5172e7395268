//! XML tokenizer pump feeding the Extractor

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use tracing::debug;
use wpmark_domain::RecordSink;

use crate::error::ExtractorError;
use crate::extractor::Extractor;

/// Parse an export file, streaming every completed record into `sink`
pub fn extract_file<S>(path: impl AsRef<Path>, sink: S) -> Result<S, ExtractorError>
where
    S: RecordSink,
    S::Error: Display,
{
    let file = File::open(path.as_ref())?;
    debug!("Opened '{}'", path.as_ref().display());
    extract_from_reader(BufReader::new(file), sink)
}

/// Parse an export held in memory
pub fn extract_str<S>(xml: &str, sink: S) -> Result<S, ExtractorError>
where
    S: RecordSink,
    S::Error: Display,
{
    extract_from_reader(xml.as_bytes(), sink)
}

/// Parse an export from any buffered reader
///
/// Namespaced element names are passed on as `{uri}local`. Adjacent text and
/// CDATA chunks between two tags reach the Extractor as one text event.
pub fn extract_from_reader<R, S>(source: R, sink: S) -> Result<S, ExtractorError>
where
    R: BufRead,
    S: RecordSink,
    S::Error: Display,
{
    let mut reader = NsReader::from_reader(source);
    let mut extractor = Extractor::new(sink);
    let mut text = String::new();
    let mut buf = Vec::new();
    let mut events: u64 = 0;

    loop {
        let position = reader.buffer_position() as u64;
        let (namespace, event) = reader
            .read_resolved_event_into(&mut buf)
            .map_err(|e| ExtractorError::Xml {
                position,
                message: e.to_string(),
            })?;
        events += 1;

        match event {
            Event::Start(e) => {
                flush_text(&mut extractor, &mut text);
                let name = qualified_name(&namespace, e.local_name().as_ref())?;
                extractor.on_open(&name);
            }
            Event::Empty(e) => {
                flush_text(&mut extractor, &mut text);
                let name = qualified_name(&namespace, e.local_name().as_ref())?;
                extractor.on_open(&name);
                extractor.on_close(&name).map_err(sink_error)?;
            }
            Event::End(e) => {
                flush_text(&mut extractor, &mut text);
                let name = qualified_name(&namespace, e.local_name().as_ref())?;
                extractor.on_close(&name).map_err(sink_error)?;
            }
            Event::Text(e) => {
                let chunk = e
                    .unescape()
                    .map_err(|e| ExtractorError::Encoding(e.to_string()))?;
                text.push_str(&chunk);
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                let chunk = std::str::from_utf8(&bytes)
                    .map_err(|e| ExtractorError::Encoding(e.to_string()))?;
                text.push_str(chunk);
            }
            Event::Eof => {
                flush_text(&mut extractor, &mut text);
                break;
            }
            // Declarations, processing instructions, comments, doctype
            _ => {}
        }

        buf.clear();
    }

    debug!("Processed {} XML events", events);
    Ok(extractor.into_sink())
}

fn flush_text<S: RecordSink>(extractor: &mut Extractor<S>, text: &mut String) {
    if !text.is_empty() {
        extractor.on_text(text);
        text.clear();
    }
}

fn qualified_name(namespace: &ResolveResult, local: &[u8]) -> Result<String, ExtractorError> {
    let local =
        std::str::from_utf8(local).map_err(|e| ExtractorError::Encoding(e.to_string()))?;

    match namespace {
        ResolveResult::Bound(ns) => {
            let uri = std::str::from_utf8(ns.0)
                .map_err(|e| ExtractorError::Encoding(e.to_string()))?;
            Ok(format!("{{{}}}{}", uri, local))
        }
        _ => Ok(local.to_string()),
    }
}

fn sink_error<E: Display>(e: E) -> ExtractorError {
    ExtractorError::Sink(e.to_string())
}
