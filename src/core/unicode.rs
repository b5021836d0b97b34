//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자모: 초성 순서와 다르므로 직접 매핑
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    '\u{3131}', // ㄱ
    '\u{3132}', // ㄲ
    '\u{3134}', // ㄴ
    '\u{3137}', // ㄷ
    '\u{3138}', // ㄸ
    '\u{3139}', // ㄹ
    '\u{3141}', // ㅁ
    '\u{3142}', // ㅂ
    '\u{3143}', // ㅃ
    '\u{3145}', // ㅅ
    '\u{3146}', // ㅆ
    '\u{3147}', // ㅇ
    '\u{3148}', // ㅈ
    '\u{3149}', // ㅉ
    '\u{314A}', // ㅊ
    '\u{314B}', // ㅋ
    '\u{314C}', // ㅌ
    '\u{314D}', // ㅍ
    '\u{314E}', // ㅎ
];

/// 호환용 모음 자모 시작 (ㅏ), 중성 순서와 동일하게 연속 배치됨
const JUNGSEONG_JAMO_BASE: u32 = 0x314F;

/// 완성형 한글 음절인지 확인 (가 ~ 힣)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 조합 중인 슬롯을 출력 문자로 변환
///
/// - 초성만 있으면 호환용 초성 자모 (종성은 무시)
/// - 초성+중성이면 완성형 음절
/// - 초성이 없으면 출력 없음
pub fn compose(choseong: Option<u32>, jungseong: Option<u32>, jongseong: u32) -> Option<char> {
    match (choseong, jungseong) {
        (Some(cho), None) => choseong_to_jamo_char(cho),
        (Some(cho), Some(jung)) => compose_syllable(cho, jung, jongseong),
        (None, _) => None,
    }
}

/// 초성만 있을 때 해당 자모 문자 반환 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성만 있을 때 해당 모음 문자 반환 (호환용 자모)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(JUNGSEONG_JAMO_BASE + jung)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 각 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 ㄱ(1)
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
        assert_eq!(compose_syllable(19, 0, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글 음절이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_compose_decompose_all_triples() {
        for cho in 0..CHOSEONG_COUNT {
            for jung in 0..JUNGSEONG_COUNT {
                for jong in 0..JONGSEONG_COUNT {
                    let c = compose_syllable(cho, jung, jong).unwrap();
                    assert_eq!(decompose_syllable(c), Some((cho, jung, jong)));
                }
            }
        }
    }

    #[test]
    fn test_compose_slots() {
        assert_eq!(compose(Some(0), None, 0), Some('ㄱ'));
        // 중성이 없으면 종성은 무시
        assert_eq!(compose(Some(2), None, 4), Some('ㄴ'));
        assert_eq!(compose(Some(11), Some(0), 4), Some('안'));
        assert_eq!(compose(None, None, 0), None);
        assert_eq!(compose(None, Some(0), 0), None);
    }

    #[test]
    fn test_choseong_to_jamo_char() {
        assert_eq!(choseong_to_jamo_char(0), Some('ㄱ'));
        assert_eq!(choseong_to_jamo_char(1), Some('ㄲ'));
        assert_eq!(choseong_to_jamo_char(18), Some('ㅎ'));
        assert_eq!(choseong_to_jamo_char(19), None);
    }

    #[test]
    fn test_jungseong_to_jamo_char() {
        assert_eq!(jungseong_to_jamo_char(0), Some('ㅏ'));
        assert_eq!(jungseong_to_jamo_char(9), Some('ㅘ'));
        assert_eq!(jungseong_to_jamo_char(20), Some('ㅣ'));
        assert_eq!(jungseong_to_jamo_char(21), None);
    }

    #[test]
    fn test_is_hangul_syllable() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('ㄱ'));
        assert!(!is_hangul_syllable('a'));
    }
}
