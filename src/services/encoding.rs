use chardetng::EncodingDetector;
use encoding_rs::Encoding;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// Lower-case encoding label, `utf-8-sig` when a BOM was stripped.
    pub encoding: String,
}

/// Decodes file contents to text.
///
/// UTF-8 (with or without BOM) is taken as is. Anything else goes through
/// charset detection, which covers spreadsheet exports in Shift_JIS,
/// EUC-KR or GBK.
pub fn decode(bytes: &[u8]) -> DecodedText {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return DecodedText {
            text: String::from_utf8_lossy(rest).into_owned(),
            encoding: "utf-8-sig".into(),
        };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_string(),
            encoding: "utf-8".into(),
        };
    }

    let encoding = detect(bytes);
    let (text, _, had_errors) = encoding.decode(bytes);
    let name = encoding.name().to_lowercase();

    if had_errors {
        log::warn!("decoding as {} replaced malformed sequences", name);
    } else {
        log::debug!("decoded non-UTF-8 input as {}", name);
    }

    DecodedText {
        text: text.into_owned(),
        encoding: name,
    }
}

fn detect(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
