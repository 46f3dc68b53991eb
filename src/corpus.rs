//! Corpus loading module
//!
//! Reads a symbol-name corpus into memory, detecting its text encoding and
//! splitting it into one record per line.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::path::Path;

use crate::error::{Result, WordlistError};

/// A single raw corpus line, without its line terminator.
pub type NameRecord = String;

/// Number of bytes sampled for encoding detection
const DETECTION_SAMPLE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
    /// Length of the byte order mark to skip, if any
    pub bom_len: usize,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
            bom_len: 0,
        }
    }
}

/// Detect the encoding of corpus bytes.
///
/// A BOM wins; otherwise any input with well-formed UTF-8 is treated as
/// UTF-8, and only the remainder is sampled by `chardetng`.
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    // A BOM is authoritative
    if let Some((encoding, bom_len)) = Encoding::for_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
            bom_len,
        };
    }

    if std::str::from_utf8(content).is_ok() {
        return EncodingInfo::default();
    }

    // Valid multi-byte sequences mean a UTF-8 corpus with stray bad bytes;
    // a legacy single-byte guess would garble every non-ASCII term.
    if has_utf8_multibyte(content) {
        return EncodingInfo {
            confidence: 0.5,
            ..EncodingInfo::default()
        };
    }

    let sample = &content[..content.len().min(DETECTION_SAMPLE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    let encoding = detector.guess(None, true);

    EncodingInfo {
        name: encoding.name(),
        confidence: 0.8,
        encoding,
        bom_len: 0,
    }
}

/// True if the bytes contain at least one well-formed multi-byte UTF-8
/// sequence, skipping over invalid bytes
fn has_utf8_multibyte(mut bytes: &[u8]) -> bool {
    loop {
        match std::str::from_utf8(bytes) {
            Ok(s) => return !s.is_ascii(),
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                if !valid.is_ascii() {
                    return true;
                }
                match e.error_len() {
                    Some(len) => bytes = &rest[len..],
                    None => return false,
                }
            }
        }
    }
}

/// Decode corpus bytes to UTF-8 text
pub fn decode(content: &[u8], info: &EncodingInfo) -> String {
    let body = &content[info.bom_len..];

    if info.encoding == encoding_rs::UTF_8 {
        match std::str::from_utf8(body) {
            Ok(s) => s.to_string(),
            Err(e) => {
                log::warn!(
                    "Invalid UTF-8 at byte {}, using lossy conversion",
                    e.valid_up_to() + info.bom_len
                );
                String::from_utf8_lossy(body).into_owned()
            }
        }
    } else {
        let (decoded, had_errors) = info.encoding.decode_without_bom_handling(body);
        if had_errors {
            log::warn!("Malformed {} sequences in corpus, using lossy conversion", info.name);
        }
        decoded.into_owned()
    }
}

/// Read the whole corpus file as UTF-8 text.
///
/// The file is memory-mapped; an absent or unreadable file is
/// [`WordlistError::InputMissing`].
pub fn read_corpus_text(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| WordlistError::input_missing(path, e))?;
    let len = file
        .metadata()
        .map_err(|e| WordlistError::input_missing(path, e))?
        .len();

    if len == 0 {
        return Ok(String::new());
    }

    // SAFETY: the map is read once and dropped before returning; the corpus
    // is not expected to be modified while the run is reading it.
    let mmap = unsafe { memmap2::Mmap::map(&file) }
        .map_err(|e| WordlistError::input_missing(path, e))?;

    let info = detect_encoding(&mmap);
    log::debug!(
        "Corpus {:?}: {} bytes, encoding {} (confidence {:.1})",
        path,
        mmap.len(),
        info.name,
        info.confidence
    );

    Ok(decode(&mmap, &info))
}

/// Split corpus text into records, one per line.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, so text ending in a line
/// break yields a final empty record and empty text yields a single empty
/// record.
pub fn split_records(text: &str) -> Vec<NameRecord> {
    let bytes = text.as_bytes();
    let mut records = Vec::new();
    let mut start = 0;

    for pos in memchr::memchr2_iter(b'\n', b'\r', bytes) {
        // The `\n` of a `\r\n` pair
        if pos < start {
            continue;
        }
        records.push(text[start..pos].to_string());
        start = if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
            pos + 2
        } else {
            pos + 1
        };
    }
    records.push(text[start..].to_string());

    records
}

/// Load a corpus file into an ordered sequence of name records
pub fn load_corpus(path: &Path) -> Result<Vec<NameRecord>> {
    let text = read_corpus_text(path)?;
    Ok(split_records(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_detection() {
        let info = detect_encoding("ioctl_deallocate\nпривет_мир\n".as_bytes());
        assert_eq!(info.name, "UTF-8");
        assert_eq!(info.bom_len, 0);
    }

    #[test]
    fn test_bom_detection() {
        let info = detect_encoding(&[0xEF, 0xBB, 0xBF, b'a', b'_', b'b']);
        assert_eq!(info.encoding, encoding_rs::UTF_8);
        assert_eq!(info.bom_len, 3);

        let info = detect_encoding(&[0xFF, 0xFE, b'a', 0x00]);
        assert_eq!(info.encoding, encoding_rs::UTF_16LE);
        assert_eq!(info.bom_len, 2);
    }

    #[test]
    fn test_decode_skips_bom() {
        let bytes = [0xEF, 0xBB, 0xBF, b'a', b'_', b'b'];
        let info = detect_encoding(&bytes);
        assert_eq!(decode(&bytes, &info), "a_b");
    }

    #[test]
    fn test_decode_utf16le() {
        let bytes = [0xFF, 0xFE, b'X', 0x00, b'_', 0x00, b'1', 0x00];
        let info = detect_encoding(&bytes);
        assert_eq!(decode(&bytes, &info), "X_1");
    }

    #[test]
    fn test_utf8_corpus_with_bad_byte_stays_utf8() {
        let bytes = b"gr\xc3\xb6\xc3\x9fe_wert\nfoo_bar\nbad\xffbyte\n";
        let info = detect_encoding(bytes);

        assert_eq!(info.encoding, encoding_rs::UTF_8);
        assert_eq!(
            split_records(&decode(bytes, &info)),
            vec!["größe_wert", "foo_bar", "bad\u{FFFD}byte", ""]
        );
    }

    #[test]
    fn test_bad_byte_before_multibyte_stays_utf8() {
        let info = detect_encoding(b"bad\xffbyte\ngr\xc3\xb6\xc3\x9fe");
        assert_eq!(info.encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_single_byte_corpus_is_not_utf8() {
        let info = detect_encoding(b"caf\xe9_cr\xe8me\nna\xefve_r\xe9sum\xe9\n");
        assert_ne!(info.encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_split_records() {
        assert_eq!(split_records("a_b\nc_d"), vec!["a_b", "c_d"]);
        assert_eq!(split_records("a_b\r\nc_d\r\n"), vec!["a_b", "c_d", ""]);
        assert_eq!(split_records(""), vec![""]);
        assert_eq!(split_records("\n\n"), vec!["", "", ""]);
    }

    #[test]
    fn test_split_records_lone_carriage_return() {
        assert_eq!(split_records("abc\rDEF"), vec!["abc", "DEF"]);
        assert_eq!(split_records("a\r\nb\rc\n"), vec!["a", "b", "c", ""]);
        assert_eq!(split_records("x\r"), vec!["x", ""]);
        assert_eq!(split_records("\r\r\n"), vec!["", "", ""]);
    }

    #[test]
    fn test_load_corpus() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ioctl_deallocate_iso_resource").unwrap();
        write!(file, "a__b").unwrap();

        let records = load_corpus(file.path()).unwrap();
        assert_eq!(records, vec!["ioctl_deallocate_iso_resource", "a__b"]);
    }

    #[test]
    fn test_load_empty_corpus() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(load_corpus(file.path()).unwrap(), vec![""]);
    }

    #[test]
    fn test_load_missing_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_corpus(&dir.path().join("symbol_names.txt")).unwrap_err();

        match err {
            WordlistError::InputMissing { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
