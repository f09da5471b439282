use chardetng::EncodingDetector;
use encoding_rs::UTF_8;

/// Decodifica bytes de arquivo para String sem assumir UTF-8.
/// UTF-8 válido (com ou sem BOM) passa direto; qualquer outra coisa
/// cai na detecção (arquivos da ferramenta antiga vinham em codepage
/// de 8 bits, tipicamente windows-1252).
pub fn decode_bytes(bytes: &[u8]) -> String {
    // BOM UTF-8 (EF BB BF)
    let bytes = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &bytes[3..]
    } else {
        bytes
    };

    let (text, had_errors) = UTF_8.decode_without_bom_handling(bytes);
    if !had_errors {
        return text.into_owned();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);

    let encoding = detector.guess(None, true);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
