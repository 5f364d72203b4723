pub mod common_prefix_len;
pub mod common_suffix_len;
pub mod decode_text;
pub mod side;
