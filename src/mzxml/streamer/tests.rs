use super::*;
use crate::metadata::{MassAnalyzerType, VendorType};
use crate::mzxml::PeakDecodeError;
use crate::scan::MsLevel;
use std::io::{BufReader, Cursor};

// Network-order float32 pairs (100, 10), (200, 20)
const MS1_PEAKS: &str = "QsgAAEEgAABDSAAAQaAAAA==";
// Network-order float32 pairs (150, 5), (250, 7)
const MS2_PEAKS: &str = "QxYAAECgAABDegAAQOAAAA==";
// Network-order float32 pairs (0, 0), (-1, 0)
const ZERO_PEAKS: &str = "AAAAAAAAAAC/gAAAAAAAAA==";
// zlib network-order float64 pairs (300, 3), (100, 1), (200, 2)
const UNORDERED_ZLIB64: &str = "eJxzKDrAAAIOHAwQOhJC23+A8jOhNIRiAACJPARs";

const TWO_SCAN_MZXML: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<mzXML xmlns="http://sashimi.sourceforge.net/schema_revision/mzXML_3.2">
  <msRun scanCount="2" startTime="PT60S" endTime="PT120S">
    <parentFile fileName="file://C:/data/run01.raw" fileType="RAWData" fileSha1="0"/>
    <msInstrument msInstrumentID="1">
      <msManufacturer category="msManufacturer" value="Thermo Scientific"/>
      <msModel category="msModel" value="Q Exactive"/>
      <msIonisation category="msIonisation" value="nanoelectrospray"/>
      <msMassAnalyzer category="msMassAnalyzer" value="FTMS"/>
    </msInstrument>
    <dataProcessing centroided="1">
      <software type="conversion" name="ProteoWizard" version="3.0"/>
    </dataProcessing>
    <scan num="1" scanType="Full" centroided="1" msLevel="1" peaksCount="2" polarity="+" retentionTime="PT60S">
      <peaks compressionType="none" compressedLen="0" precision="32" byteOrder="network" contentType="m/z-int">QsgAAEEgAABDSAAAQaAAAA==</peaks>
    </scan>
    <scan num="2" scanType="Full" centroided="0" msLevel="2" peaksCount="2" polarity="+" retentionTime="PT120S">
      <precursorMz precursorScanNum="1" precursorIntensity="1000" activationMethod="HCD" windowWideness="2.0">500.0</precursorMz>
      <peaks compressionType="none" compressedLen="0" precision="32" byteOrder="network" contentType="m/z-int">QxYAAECgAABDegAAQOAAAA==</peaks>
    </scan>
  </msRun>
</mzXML>"#;

fn streamer_for(doc: &str) -> MzXmlStreamer<BufReader<Cursor<Vec<u8>>>> {
    MzXmlStreamer::new(BufReader::new(Cursor::new(doc.as_bytes().to_vec()))).unwrap()
}

fn wrap_scans(scans: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<mzXML>
  <msRun>
    <msInstrument>
      <msManufacturer category="msManufacturer" value="Bruker"/>
    </msInstrument>
    {}
  </msRun>
</mzXML>"#,
        scans
    )
}

#[test]
fn test_header_metadata() {
    let streamer = streamer_for(TWO_SCAN_MZXML);
    let metadata = streamer.metadata();

    assert_eq!(metadata.vendor, VendorType::Thermo);
    assert_eq!(metadata.vendor_name.as_deref(), Some("Thermo Scientific"));
    assert_eq!(metadata.instrument_model, "Q Exactive");
    assert_eq!(metadata.serial_number, "Unknown");
    assert_eq!(metadata.original_file_name, "file://C:/data/run01.raw");
    assert_eq!(metadata.ms1_analyzer, MassAnalyzerType::FtIcr);
    assert_eq!(streamer.total_scan_count(), 2);
}

#[test]
fn test_two_scan_document() {
    let scans: Vec<_> = streamer_for(TWO_SCAN_MZXML)
        .scans()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(scans.len(), 2);

    let ms1 = &scans[0];
    assert_eq!(ms1.ms_level(), MsLevel::from_code(0));
    assert!(ms1.is_centroid());
    assert!((ms1.retention_time() - 1.0).abs() < 1e-12);
    assert_eq!(ms1.peaks().mz(), &[100.0, 200.0]);
    assert_eq!(ms1.peaks().intensity(), &[10.0, 20.0]);
    assert!(ms1.precursors().is_empty());

    let ms2 = &scans[1];
    assert_eq!(ms2.ms_level(), MsLevel::LEVEL1);
    assert!(!ms2.is_centroid());
    assert!((ms2.retention_time() - 2.0).abs() < 1e-12);
    assert_eq!(ms2.peaks().mz(), &[150.0, 250.0]);
    assert_eq!(ms2.precursors().len(), 1);
    assert_eq!(ms2.precursors()[0].window_start(), 499.0);
    assert_eq!(ms2.precursors()[0].window_end(), 501.0);
}

#[test]
fn test_attribute_entities_are_resolved() {
    let doc = r#"<?xml version="1.0"?>
<mzXML><msRun scanCount="1">
  <parentFile fileName="C:\runs\a&amp;b &quot;01&quot;.raw"/>
  <msInstrument><msModel category="msModel" value="Orbitrap&#32;Fusion"/></msInstrument>
</msRun></mzXML>"#;
    let streamer = streamer_for(doc);
    assert_eq!(
        streamer.metadata().original_file_name,
        r#"C:\runs\a&b "01".raw"#
    );
    assert_eq!(streamer.metadata().instrument_model, "Orbitrap Fusion");
}

#[test]
fn test_latin1_attributes_follow_declared_encoding() {
    let mut doc = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<mzXML><msRun><parentFile fileName="caf"#
        .to_vec();
    doc.push(0xE9);
    doc.extend_from_slice(br#".raw"/><msInstrument/></msRun></mzXML>"#);

    let streamer = MzXmlStreamer::new(BufReader::new(Cursor::new(doc))).unwrap();
    assert_eq!(streamer.metadata().original_file_name, "caf\u{e9}.raw");
}

#[test]
fn test_missing_scan_count_is_unknown() {
    let streamer = streamer_for(&wrap_scans(""));
    assert_eq!(streamer.total_scan_count(), -1);
    assert_eq!(streamer.metadata().vendor, VendorType::Bruker);
    assert_eq!(streamer.metadata().instrument_model, "Unknown");
}

#[test]
fn test_no_scans_yields_empty_sequence() {
    let mut streamer = streamer_for(&wrap_scans(""));
    assert!(streamer.next_scan().unwrap().is_none());
    assert!(streamer.next_scan().unwrap().is_none());

    let mut bare = streamer_for("<mzXML><msRun/></mzXML>");
    assert!(bare.next_scan().unwrap().is_none());
}

#[test]
fn test_scan_with_no_surviving_pairs() {
    let doc = wrap_scans(&format!(
        r#"<scan num="1" msLevel="1" retentionTime="PT1S"><peaks precision="32" byteOrder="network">{}</peaks></scan>"#,
        ZERO_PEAKS
    ));
    let scan = streamer_for(&doc).next_scan().unwrap().unwrap();
    assert!(scan.peaks().is_empty());
}

#[test]
fn test_empty_scan_element() {
    let doc = wrap_scans(r#"<scan num="1" msLevel="3" retentionTime="PT2M"/>"#);
    let mut streamer = streamer_for(&doc);
    let scan = streamer.next_scan().unwrap().unwrap();
    assert_eq!(scan.ms_level(), MsLevel::LEVEL2);
    assert_eq!(scan.retention_time(), 2.0);
    assert!(scan.peaks().is_empty());
    assert!(streamer.next_scan().unwrap().is_none());
}

#[test]
fn test_nested_scans_in_document_order() {
    let doc = wrap_scans(&format!(
        r#"<scan num="1" msLevel="1" retentionTime="PT10S">
      <peaks precision="32" byteOrder="network">{}</peaks>
      <scan num="2" msLevel="2" retentionTime="PT11S">
        <precursorMz windowWideness="4">600</precursorMz>
        <peaks precision="32" byteOrder="network">{}</peaks>
      </scan>
      <scan num="3" msLevel="2" retentionTime="PT12S"/>
    </scan>
    <scan num="4" msLevel="1" retentionTime="PT13S"/>"#,
        MS1_PEAKS, MS2_PEAKS
    ));
    let scans: Vec<_> = streamer_for(&doc)
        .scans()
        .collect::<Result<_, _>>()
        .unwrap();

    let levels: Vec<i32> = scans.iter().map(|s| s.ms_level().code()).collect();
    assert_eq!(levels, vec![0, 1, 1, 0]);
    assert_eq!(scans[0].peaks().mz(), &[100.0, 200.0]);
    assert_eq!(scans[1].peaks().mz(), &[150.0, 250.0]);
    assert_eq!(scans[1].precursors()[0].window_start(), 598.0);
    assert!((scans[3].retention_time() - 13.0 / 60.0).abs() < 1e-12);
}

#[test]
fn test_unordered_zlib_float64_peaks_are_sorted() {
    let doc = wrap_scans(&format!(
        r#"<scan num="1" msLevel="1"><peaks compressionType="zlib" precision="64" byteOrder="network">{}</peaks></scan>"#,
        UNORDERED_ZLIB64
    ));
    let scan = streamer_for(&doc).next_scan().unwrap().unwrap();
    assert_eq!(scan.peaks().mz(), &[100.0, 200.0, 300.0]);
    assert_eq!(scan.peaks().intensity(), &[1.0, 2.0, 3.0]);
    assert!(scan.retention_time().is_nan());
}

#[test]
fn test_case_insensitive_names() {
    let doc = format!(
        r#"<MZXML><MSRUN SCANCOUNT="1"><MSINSTRUMENT><MSMODEL VALUE="TripleTOF"/></MSINSTRUMENT>
<SCAN MSLEVEL="2" CENTROIDED="false" RETENTIONTIME="PT6S"><PRECURSORMZ WINDOWWIDENESS="1">400</PRECURSORMZ><PEAKS PRECISION="32" BYTEORDER="NETWORK">{}</PEAKS></SCAN>
</MSRUN></MZXML>"#,
        MS1_PEAKS
    );
    let mut streamer = streamer_for(&doc);
    assert_eq!(streamer.metadata().instrument_model, "TripleTOF");
    assert_eq!(streamer.total_scan_count(), 1);

    let scan = streamer.next_scan().unwrap().unwrap();
    assert!(!scan.is_centroid());
    assert_eq!(scan.precursors()[0].window_end(), 400.5);
    assert_eq!(scan.peaks().len(), 2);
}

#[test]
fn test_peaks_in_cdata() {
    let doc = wrap_scans(&format!(
        r#"<scan num="1" msLevel="1"><peaks precision="32" byteOrder="network"><![CDATA[{}]]></peaks></scan>"#,
        MS1_PEAKS
    ));
    let scan = streamer_for(&doc).next_scan().unwrap().unwrap();
    assert_eq!(scan.peaks().mz(), &[100.0, 200.0]);
}

#[test]
fn test_scan_before_instrument_end_is_kept() {
    let doc = format!(
        r#"<mzXML><msRun scanCount="1"><msInstrument><msModel value="LTQ"/>
<scan num="1" msLevel="1"><peaks precision="32" byteOrder="network">{}</peaks></scan>
</msInstrument></msRun></mzXML>"#,
        MS1_PEAKS
    );
    let mut streamer = streamer_for(&doc);
    assert_eq!(streamer.metadata().instrument_model, "LTQ");
    let scan = streamer.next_scan().unwrap().unwrap();
    assert_eq!(scan.peaks().len(), 2);
    assert!(streamer.next_scan().unwrap().is_none());
}

#[test]
fn test_precursor_defaults_to_full_range() {
    let doc = wrap_scans(
        r#"<scan num="1" msLevel="2"><precursorMz precursorIntensity="10">500</precursorMz></scan>
    <scan num="2" msLevel="2"><precursorMz windowWideness="2"/></scan>"#,
    );
    let scans: Vec<_> = streamer_for(&doc)
        .scans()
        .collect::<Result<_, _>>()
        .unwrap();
    for scan in &scans {
        assert_eq!(scan.precursors().len(), 1);
        assert_eq!(scan.precursors()[0].window_start(), 0.0);
        assert_eq!(scan.precursors()[0].window_end(), 5000.0);
    }
}

#[test]
fn test_unparsable_precursor_is_fatal() {
    let doc = wrap_scans(
        r#"<scan num="1" msLevel="2"><precursorMz windowWideness="wide">500</precursorMz></scan>"#,
    );
    let err = streamer_for(&doc).next_scan().unwrap_err();
    assert!(matches!(
        err,
        MzXmlError::InvalidNumber { field: "windowWideness", .. }
    ));
}

#[test]
fn test_non_finite_precursor_is_fatal() {
    for (width, center, field) in [
        ("NaN", "500", "windowWideness"),
        ("inf", "500", "windowWideness"),
        ("2.0", "NaN", "precursorMz"),
        ("2.0", "-infinity", "precursorMz"),
    ] {
        let doc = wrap_scans(&format!(
            r#"<scan num="1" msLevel="2"><precursorMz windowWideness="{}">{}</precursorMz></scan>"#,
            width, center
        ));
        let err = streamer_for(&doc).next_scan().unwrap_err();
        assert!(
            matches!(err, MzXmlError::InvalidNumber { field: f, .. } if f == field),
            "{} / {}: {:?}",
            width,
            center,
            err
        );
    }
}

#[test]
fn test_unparsable_retention_time_is_fatal() {
    let doc = wrap_scans(r#"<scan num="1" msLevel="1" retentionTime="PTxS"/>"#);
    let err = streamer_for(&doc).next_scan().unwrap_err();
    assert!(matches!(
        err,
        MzXmlError::InvalidNumber { field: "retentionTime", .. }
    ));
}

#[test]
fn test_bad_child_scan_yields_parent_first() {
    let doc = wrap_scans(&format!(
        r#"<scan num="1" msLevel="1" retentionTime="PT60S">
      <peaks precision="32" byteOrder="network">{}</peaks>
      <scan num="2" msLevel="2" retentionTime="bogus"/>
    </scan>"#,
        MS1_PEAKS
    ));
    let mut streamer = streamer_for(&doc);

    let parent = streamer.next_scan().unwrap().unwrap();
    assert_eq!(parent.retention_time(), 1.0);
    assert_eq!(parent.peaks().len(), 2);

    let err = streamer.next_scan().unwrap_err();
    assert!(matches!(
        err,
        MzXmlError::InvalidNumber { field: "retentionTime", .. }
    ));
    assert!(streamer.next_scan().unwrap().is_none());
}

#[test]
fn test_unsupported_compression_stops_iteration() {
    let doc = wrap_scans(&format!(
        r#"<scan num="1" msLevel="1"><peaks compressionType="bzip2" precision="32">{}</peaks></scan>
    <scan num="2" msLevel="1"/>"#,
        MS1_PEAKS
    ));
    let mut scans = streamer_for(&doc).scans();
    let err = scans.next().unwrap().unwrap_err();
    assert!(matches!(
        err,
        MzXmlError::PeakDecode(PeakDecodeError::UnsupportedCompression(_))
    ));
    assert!(scans.next().is_none());
}

#[test]
fn test_truncated_scan_is_error() {
    let doc = format!(
        r#"<mzXML><msRun><msInstrument/>
<scan num="1" msLevel="1"><peaks precision="32" byteOrder="network">{}</peaks>"#,
        MS1_PEAKS
    );
    let err = streamer_for(&doc).next_scan().unwrap_err();
    assert!(matches!(err, MzXmlError::InvalidStructure(_)));
}

#[test]
fn test_open_from_path() {
    let mut file = tempfile::Builder::new().suffix(".mzXML").tempfile().unwrap();
    std::io::Write::write_all(&mut file, TWO_SCAN_MZXML.as_bytes()).unwrap();

    let streamer = MzXmlStreamer::open(file.path()).unwrap();
    assert_eq!(streamer.scans().count(), 2);
}
