//! 한글 -> 영문 역변환 (두벌식 자판 기준)
//!
//! 완성형 한글을 두벌식 자판의 영문 키 시퀀스로 분해한 뒤 대문자로 바꾼다.
//! 글자 사이에 상태가 없는 문자 단위 변환이다.

use crate::core::jamo_table::{keys_for, Slot};
use crate::core::unicode::decompose_syllable;

/// 한글 문자열을 대문자 두벌식 키 시퀀스로 역변환
/// 한글 음절이 아닌 문자는 그대로 유지
///
/// # Examples
/// ```
/// use konglish::convert_hangul_to_keystrokes;
/// assert_eq!(convert_hangul_to_keystrokes("노"), "SH");
/// assert_eq!(convert_hangul_to_keystrokes("안녕"), "DKSSUD");
/// ```
pub fn korean_to_eng_upper(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for c in input.chars() {
        match syllable_keys(c) {
            Some(keys) => result.push_str(&keys.to_uppercase()),
            None => result.push(c),
        }
    }

    result
}

/// 한 음절의 키 시퀀스 (대소문자 유지)
fn syllable_keys(c: char) -> Option<String> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    let mut keys = String::with_capacity(5);
    keys.push_str(keys_for(Slot::Choseong, cho)?);
    keys.push_str(keys_for(Slot::Jungseong, jung)?);
    if jong != 0 {
        keys.push_str(keys_for(Slot::Jongseong, jong)?);
    }
    Some(keys)
}
