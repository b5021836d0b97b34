//! 두벌식 자판 키 패턴 <-> 초성/중성/종성 인덱스 테이블

use std::collections::HashMap;
use std::sync::LazyLock;

/// 키 패턴 최대 길이 (복합 모음/종성 포함)
pub const MAX_PATTERN_LEN: usize = 3;

/// 초성 키 패턴 (19개, 인덱스 순서 고정)
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
pub const CHOSEONG_KEYS: [&str; 19] = [
    "r", "R", "s", "e", "E", "f", "a", "q", "Q", "t",
    "T", "d", "w", "W", "c", "z", "x", "v", "g",
];

/// 중성 키 패턴 (21개)
/// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
/// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
pub const JUNGSEONG_KEYS: [&str; 21] = [
    "k", "o", "i", "O", "j", "p", "u", "P", "h", "hk",
    "ho", "hl", "y", "n", "nj", "np", "nl", "b", "m", "ml", "l",
];

/// 종성 키 패턴 (28개, 0 = 종성 없음)
pub const JONGSEONG_KEYS: [&str; 28] = [
    "",   // 없음
    "r",  // ㄱ
    "R",  // ㄲ
    "rt", // ㄳ
    "s",  // ㄴ
    "sw", // ㄵ
    "sg", // ㄶ
    "e",  // ㄷ
    "f",  // ㄹ
    "fr", // ㄺ
    "fa", // ㄻ
    "fq", // ㄼ
    "ft", // ㄽ
    "fx", // ㄾ
    "fv", // ㄿ
    "fg", // ㅀ
    "a",  // ㅁ
    "q",  // ㅂ
    "qt", // ㅄ
    "t",  // ㅅ
    "T",  // ㅆ
    "d",  // ㅇ
    "w",  // ㅈ
    "c",  // ㅊ
    "z",  // ㅋ
    "x",  // ㅌ
    "v",  // ㅍ
    "g",  // ㅎ
];

/// 자모 위치 (초성/중성/종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Choseong,
    Jungseong,
    Jongseong,
}

/// 패턴 길이별로 나눈 조회 테이블
///
/// 정확히 일치하는 키를 먼저 찾고, 없으면 소문자로 바꾼 키로 다시 찾는다.
/// 쌍자음(R, E, Q, T, W)처럼 대소문자로 구분되는 키는 정확 일치가 우선한다.
#[derive(Debug)]
pub struct PatternTable {
    by_len: [HashMap<&'static str, u32>; MAX_PATTERN_LEN + 1],
}

impl PatternTable {
    fn new(keys: &[&'static str]) -> Self {
        let mut by_len: [HashMap<&'static str, u32>; MAX_PATTERN_LEN + 1] = Default::default();
        for (index, &key) in keys.iter().enumerate() {
            // 같은 키가 두 번 나오면 먼저 나온 인덱스 유지
            by_len[key.chars().count()]
                .entry(key)
                .or_insert(index as u32);
        }
        Self { by_len }
    }

    fn get(&self, key: &str) -> Option<u32> {
        self.by_len
            .get(key.chars().count())
            .and_then(|bucket| bucket.get(key).copied())
    }

    /// 문자열 패턴 조회 (정확 일치 -> 소문자 폴백)
    pub fn lookup(&self, key: &str) -> Option<u32> {
        self.get(key).or_else(|| self.get(&key.to_lowercase()))
    }

    /// 문자 슬라이스 패턴 조회
    pub fn lookup_chars(&self, keys: &[char]) -> Option<u32> {
        if keys.len() > MAX_PATTERN_LEN {
            return None;
        }
        let key: String = keys.iter().collect();
        self.lookup(&key)
    }
}

static CHOSEONG_TABLE: LazyLock<PatternTable> = LazyLock::new(|| PatternTable::new(&CHOSEONG_KEYS));
static JUNGSEONG_TABLE: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::new(&JUNGSEONG_KEYS));
static JONGSEONG_TABLE: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::new(&JONGSEONG_KEYS));

/// 위치에 해당하는 조회 테이블 반환
pub fn table(slot: Slot) -> &'static PatternTable {
    match slot {
        Slot::Choseong => &CHOSEONG_TABLE,
        Slot::Jungseong => &JUNGSEONG_TABLE,
        Slot::Jongseong => &JONGSEONG_TABLE,
    }
}

/// 키 패턴을 해당 위치의 인덱스로 변환 (없으면 None)
pub fn lookup(slot: Slot, keys: &[char]) -> Option<u32> {
    table(slot).lookup_chars(keys)
}

/// `keys`의 앞부분에서 가장 긴 중성 패턴을 찾는다 (3 -> 2 -> 1)
/// 반환: (중성 인덱스, 패턴 길이)
pub fn longest_jungseong(keys: &[char]) -> Option<(u32, usize)> {
    (1..=MAX_PATTERN_LEN.min(keys.len()))
        .rev()
        .find_map(|len| lookup(Slot::Jungseong, &keys[..len]).map(|index| (index, len)))
}

/// 인덱스에 해당하는 키 패턴
pub fn keys_for(slot: Slot, index: u32) -> Option<&'static str> {
    let keys: &[&'static str] = match slot {
        Slot::Choseong => &CHOSEONG_KEYS,
        Slot::Jungseong => &JUNGSEONG_KEYS,
        Slot::Jongseong => &JONGSEONG_KEYS,
    };
    keys.get(index as usize).copied()
}
