
/// "Lorem ipsum dolor sit amet, consectetur adipiscing elit." as decimal bytes.
pub(crate) const LOREM_INPUT: &[u8] = b"76 111 114 101 109 32 105 112 115 117 109 32 100 111 108 111 114 32 115 \
105 116 32 97 109 101 116 44 32 99 111 110 115 101 99 116 101 116 117 \
114 32 97 100 105 112 105 115 99 105 110 103 32 101 108 105 116 46";

pub(crate) const LOREM_OUTPUT: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Encode `bytes` the way the decoders expect them.
pub(crate) fn encode(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
        .into_bytes()
}
