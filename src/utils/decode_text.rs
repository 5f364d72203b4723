use crate::{errors::ComparisonError, utils::side::Side};

/// Interpret raw bytes as the text of one side of a comparison.
///
/// Fails for invalid UTF-8 and for data containing NUL bytes: the NUL
/// character is valid in UTF-8 but it's highly suspicious in human-readable
/// text and usually means binary content was passed in.
pub fn decode_text(side: Side, data: &[u8]) -> Result<&str, ComparisonError> {
    if let Some(position) = data.iter().position(|&byte| byte == 0) {
        return Err(ComparisonError::InvalidInput {
            side,
            reason: format!("found a NUL byte at offset {position}, the data looks binary"),
        });
    }

    std::str::from_utf8(data).map_err(|error| ComparisonError::InvalidInput {
        side,
        reason: format!("not valid UTF-8 ({error})"),
    })
}
