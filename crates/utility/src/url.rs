/// Characters outside the alphanumeric range that stay unescaped in an
/// encoded URL component (the `encodeURIComponent` unreserved set).
const UNRESERVED: &[u8] = b"-_.!~*'()";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a string for embedding as a single URL path or query
/// component. Total: any input, including the empty string, encodes to a
/// valid component.
pub fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED.contains(byte) {
            encoded.push(*byte as char);
        } else {
            encoded.push('%');
            encoded.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            encoded.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_are_escaped() {
        assert_eq!(encode_component("Burger Co"), "Burger%20Co");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_component("Arby's!"), "Arby's!");
        assert_eq!(encode_component("a-b_c.d~e*(f)"), "a-b_c.d~e*(f)");
    }

    #[test]
    fn multi_byte_characters_encode_every_byte() {
        assert_eq!(encode_component("Café"), "Caf%C3%A9");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(encode_component(""), "");
    }

    #[test]
    fn reserved_url_characters_are_escaped() {
        assert_eq!(encode_component("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
    }
}
