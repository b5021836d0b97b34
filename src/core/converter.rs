//! 영문 <-> 한글 통합 변환기

use crate::core::hangul_fsm::HangulFsm;
use crate::core::keymap::korean_to_eng_upper;
use crate::core::segmenter::convert_runs;

/// 영문 키 입력을 두벌식 자판으로 보고 한글로 조합
/// 변환할 수 없는 문자(숫자, 특수문자, 매핑 없는 문자)는 그대로 유지
pub fn convert_keystrokes_to_hangul(text: &str) -> String {
    HangulFsm::new(text).run()
}

/// 완성형 한글을 대문자 두벌식 키 시퀀스로 분해
pub fn convert_hangul_to_keystrokes(text: &str) -> String {
    korean_to_eng_upper(text)
}

/// 영문 구간은 한글로, 한글 구간은 대문자 키로, 나머지는 그대로 변환
pub fn convert_mixed_script(text: &str) -> String {
    convert_runs(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert_keystrokes_to_hangul("rkskek"), "가나다");
        assert_eq!(convert_keystrokes_to_hangul("dkssudgktpdy"), "안녕하세요");
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(convert_keystrokes_to_hangul("gksrmf"), "한글");
        assert_eq!(convert_keystrokes_to_hangul("dkswl"), "안지");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(convert_keystrokes_to_hangul("123rksk"), "123가나");
        assert_eq!(convert_keystrokes_to_hangul("rk!sk"), "가!나");
    }

    #[test]
    fn test_hangul_to_keystrokes() {
        assert_eq!(convert_hangul_to_keystrokes("노"), "SH");
        assert_eq!(convert_hangul_to_keystrokes("한글 2"), "GKSRMF 2");
    }

    #[test]
    fn test_mixed_script() {
        assert_eq!(
            convert_mixed_script("hello 안녕 world"),
            "ㅗ디ㅣㅐ DKSSUD 재깅"
        );
        assert_eq!(convert_mixed_script("dkssud, 세상"), "안녕, TPTKD");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(convert_keystrokes_to_hangul(""), "");
        assert_eq!(convert_hangul_to_keystrokes(""), "");
        assert_eq!(convert_mixed_script(""), "");
    }
}
