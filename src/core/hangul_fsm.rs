//! 영문 키 입력 -> 한글 음절 조합 유한 상태 기계 (FSM)
//!
//! 입력을 왼쪽에서 오른쪽으로 읽으며 한 글자 분량의 초성/중성/종성 슬롯을 채운다.
//! 각 위치에서 가장 긴 패턴부터 테이블과 대조하고, 종성 후보 뒤에 모음이 오면
//! 그 자음은 다음 글자의 초성이 된다.

use crate::core::jamo_table::{longest_jungseong, lookup, Slot, MAX_PATTERN_LEN};
use crate::core::unicode::{compose, jungseong_to_jamo_char};

/// FSM 상태 (누산기 슬롯에서 유도됨)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성+중성 (종성은 비어 있거나 채워짐)
    Complete,
}

/// 조합 중인 한 글자
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    pub choseong: Option<u32>,
    pub jungseong: Option<u32>,
    /// 0 = 종성 없음
    pub jongseong: u32,
}

impl Accumulator {
    fn state(&self) -> State {
        match (self.choseong, self.jungseong) {
            (None, _) => State::Empty,
            (Some(_), None) => State::Choseong,
            (Some(_), Some(_)) => State::Complete,
        }
    }

    /// 현재 슬롯을 출력 문자로 변환 (초성이 없으면 None)
    pub fn compose(&self) -> Option<char> {
        compose(self.choseong, self.jungseong, self.jongseong)
    }
}

/// 현재 위치에서 찾은 종성 패턴
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodaMatch {
    None,
    Single(u32),
    Double(u32),
    Triple(u32),
}

/// 한글 조합 FSM
pub struct HangulFsm {
    keys: Vec<char>,
    pos: usize,
    acc: Accumulator,
    /// 출력 버퍼
    output: String,
}

impl HangulFsm {
    /// 입력 문자열로 FSM 생성
    pub fn new(input: &str) -> Self {
        let keys: Vec<char> = input.chars().collect();
        let capacity = input.len();
        Self {
            keys,
            pos: 0,
            acc: Accumulator::default(),
            output: String::with_capacity(capacity),
        }
    }

    /// 입력을 끝까지 소비하고 결과 반환
    pub fn run(mut self) -> String {
        while self.pos < self.keys.len() {
            self.step();
        }
        self.finish()
    }

    /// 한 위치 처리
    fn step(&mut self) {
        let c = self.keys[self.pos];

        if !c.is_alphabetic() {
            self.feed_passthrough(c);
            self.pos += 1;
            return;
        }

        match self.acc.state() {
            State::Empty => self.feed_empty(c),
            State::Choseong => self.feed_jungseong(c),
            State::Complete => self.feed_jongseong(c),
        }
    }

    /// 초성 채우기 (2글자 -> 1글자), 실패하면 모음 단독 또는 그대로 출력
    fn feed_empty(&mut self, c: char) {
        if let Some(cho) = self.ahead(2).and_then(|k| lookup(Slot::Choseong, k)) {
            self.acc.choseong = Some(cho);
            self.pos += 2;
        } else if let Some(cho) = lookup(Slot::Choseong, &[c]) {
            self.acc.choseong = Some(cho);
            self.pos += 1;
        } else if lookup(Slot::Jungseong, &[c]).is_some() {
            self.emit_isolated_vowel();
        } else {
            self.feed_passthrough(c);
            self.pos += 1;
        }
    }

    /// 중성 채우기 (3 -> 2 -> 1글자)
    fn feed_jungseong(&mut self, c: char) {
        if let Some((jung, len)) = longest_jungseong(&self.keys[self.pos..]) {
            self.acc.jungseong = Some(jung);
            self.pos += len;
        } else {
            // 초성 단독 자모 출력 후, 현재 문자로 새 글자 시작
            self.flush_current();
            self.start_or_emit(&[c]);
            self.pos += 1;
        }
    }

    /// 종성 처리 또는 다음 글자 시작
    fn feed_jongseong(&mut self, c: char) {
        match self.match_coda() {
            CodaMatch::Triple(jong) => self.fill_or_restart(jong, 3),
            CodaMatch::Double(jong) => {
                if self.vowel_follows(self.pos + 2) {
                    // 모음이 오므로 글자 경계가 두 자음 사이에 있음
                    self.split_double();
                } else {
                    self.fill_or_restart(jong, 2);
                }
            }
            CodaMatch::Single(jong) => {
                if self.vowel_follows(self.pos + 1) {
                    // 자음 + 모음은 항상 새 글자
                    self.flush_current();
                    self.start_or_emit(&[c]);
                    self.pos += 1;
                } else {
                    self.fill_or_restart(jong, 1);
                }
            }
            CodaMatch::None => {
                self.flush_current();
                if lookup(Slot::Jungseong, &[c]).is_some() {
                    self.emit_isolated_vowel();
                } else {
                    self.start_or_emit(&[c]);
                    self.pos += 1;
                }
            }
        }
    }

    /// 현재 위치에서 가장 긴 종성 패턴 (3 -> 2 -> 1글자)
    fn match_coda(&self) -> CodaMatch {
        if let Some(jong) = self.ahead(3).and_then(|k| lookup(Slot::Jongseong, k)) {
            return CodaMatch::Triple(jong);
        }
        if let Some(jong) = self.ahead(2).and_then(|k| lookup(Slot::Jongseong, k)) {
            return CodaMatch::Double(jong);
        }
        match self.ahead(1).and_then(|k| lookup(Slot::Jongseong, k)) {
            Some(jong) => CodaMatch::Single(jong),
            None => CodaMatch::None,
        }
    }

    /// 종성이 비어 있으면 채우고, 이미 있으면 현재 글자를 확정하고 새 초성으로 재해석
    fn fill_or_restart(&mut self, jong: u32, len: usize) {
        if self.acc.jongseong == 0 {
            self.acc.jongseong = jong;
        } else {
            self.flush_current();
            let end = self.pos + len;
            let keys = self.keys[self.pos..end].to_vec();
            self.start_or_emit(&keys);
        }
        self.pos += len;
    }

    /// 2글자 종성 후보 뒤에 모음이 올 때: 첫 자음은 현재 글자 쪽, 둘째 자음은 다음 글자 초성
    fn split_double(&mut self) {
        let first = self.keys[self.pos];
        let second = self.keys[self.pos + 1];

        if self.acc.jongseong == 0 {
            if let Some(jong) = lookup(Slot::Jongseong, &[first]) {
                self.acc.jongseong = jong;
            } else {
                self.flush_current();
                self.output.push(first);
            }
        } else {
            self.flush_current();
            self.start_or_emit(&[first]);
        }
        self.flush_current();
        self.start_or_emit(&[second]);
        self.pos += 2;
    }

    /// 초성 없이 입력된 모음을 호환용 자모로 출력하고 패턴 길이만큼 전진
    fn emit_isolated_vowel(&mut self) {
        match longest_jungseong(&self.keys[self.pos..]) {
            Some((jung, len)) => {
                if let Some(c) = jungseong_to_jamo_char(jung) {
                    self.output.push(c);
                }
                self.pos += len;
            }
            None => {
                self.output.push(self.keys[self.pos]);
                self.pos += 1;
            }
        }
    }

    /// 키를 새 초성으로 시작하거나, 초성이 아니면 그대로 출력
    fn start_or_emit(&mut self, keys: &[char]) {
        match lookup(Slot::Choseong, keys) {
            Some(cho) => self.acc.choseong = Some(cho),
            None => self.output.extend(keys.iter()),
        }
    }

    /// `at` 위치에서 모음 패턴이 시작하는지 확인
    fn vowel_follows(&self, at: usize) -> bool {
        at < self.keys.len() && longest_jungseong(&self.keys[at..]).is_some()
    }

    /// 현재 위치부터 `len`글자 (입력 끝을 넘으면 None)
    fn ahead(&self, len: usize) -> Option<&[char]> {
        debug_assert!(len <= MAX_PATTERN_LEN);
        self.keys.get(self.pos..self.pos + len)
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가하고 누산기 초기화
    fn flush_current(&mut self) {
        if let Some(c) = self.acc.compose() {
            log::trace!("flush {:?} -> {}", self.acc, c);
            self.output.push(c);
        }
        self.acc = Accumulator::default();
    }

    /// 변환 불가 문자 처리 (숫자, 특수문자 등)
    fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}
