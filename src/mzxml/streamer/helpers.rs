use quick_xml::encoding::Decoder;
use quick_xml::events::BytesStart;

use super::MzXmlError;

pub(super) const SCAN: &str = "scan";
pub(super) const PEAKS: &str = "peaks";
pub(super) const PRECURSOR_MZ: &str = "precursorMz";
pub(super) const MS_MANUFACTURER: &str = "msManufacturer";
pub(super) const MS_MODEL: &str = "msModel";
pub(super) const MS_MASS_ANALYZER: &str = "msMassAnalyzer";
pub(super) const PARENT_FILE: &str = "parentFile";
pub(super) const MS_RUN: &str = "msRun";
pub(super) const MS_INSTRUMENT: &str = "msInstrument";

/// Case-insensitive comparison of an element or attribute local name
pub(super) fn name_is(name: &[u8], expected: &str) -> bool {
    name.eq_ignore_ascii_case(expected.as_bytes())
}

/// Get an attribute value by case-insensitive local name
///
/// The value is decoded with the document encoding and entity references
/// such as `&amp;` are resolved.
pub(super) fn get_attribute(
    e: &BytesStart,
    name: &str,
    decoder: Decoder,
) -> Result<Option<String>, MzXmlError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| MzXmlError::Xml(quick_xml::Error::from(e)))?;
        if name_is(attr.key.local_name().as_ref(), name) {
            let value = attr.decode_and_unescape_value(decoder)?.into_owned();
            return Ok(Some(value));
        }
    }
    Ok(None)
}
