//! 두벌식 자판 기준 영문 키 입력 <-> 한글 변환 라이브러리

pub mod config;
pub mod core;
pub mod detection;

pub use crate::config::{load_config, ConfigError, KonglishConfig};
pub use crate::core::converter::{
    convert_hangul_to_keystrokes, convert_keystrokes_to_hangul, convert_mixed_script,
};
pub use crate::detection::{
    alphabetic_ratio, FixDecision, JamoIntegrityScale, KoreanFixer, KoreanScale,
};
