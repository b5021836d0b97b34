//! 변환 결과 검증 모듈
//!
//! 낱자모 검출

use crate::core::unicode::is_hangul_syllable;

/// 호환용 자모 영역 (ㄱ-ㅎ, ㅏ-ㅣ): U+3131 ~ U+318E
fn is_compat_jamo(ch: char) -> bool {
    (0x3131..=0x318E).contains(&(ch as u32))
}

/// 완성형 한글이 아닌 낱자모가 포함되어 있는지 검사
pub fn has_incomplete_jamo(text: &str) -> bool {
    text.chars().any(is_compat_jamo)
}

/// 낱자모 비율 계산 (0.0 ~ 1.0)
/// 한글 문자(완성형 + 낱자모) 중 낱자모의 비율
pub fn incomplete_jamo_ratio(text: &str) -> f32 {
    let mut jamo_count = 0;
    let mut hangul_count = 0;

    for ch in text.chars() {
        if is_compat_jamo(ch) {
            jamo_count += 1;
            hangul_count += 1;
        } else if is_complete_hangul(ch) {
            hangul_count += 1;
        }
    }

    if hangul_count == 0 {
        return 0.0;
    }

    jamo_count as f32 / hangul_count as f32
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(ch: char) -> bool {
    is_hangul_syllable(ch)
}

/// 한글(완성형 또는 낱자모)이 하나라도 포함되어 있는지 확인
pub fn has_any_hangul(text: &str) -> bool {
    text.chars().any(|ch| is_complete_hangul(ch) || is_compat_jamo(ch))
}
