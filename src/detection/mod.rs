//! 한글 오입력 감지 모듈

mod fixer;
pub mod ratio;
pub mod validator;

pub use fixer::{FixDecision, JamoIntegrityScale, KoreanFixer, KoreanScale};
pub use ratio::alphabetic_ratio;
pub use validator::{has_any_hangul, has_incomplete_jamo, incomplete_jamo_ratio};
