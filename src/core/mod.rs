//! 두벌식 자판 한영 변환 핵심 로직

pub mod converter;
pub mod hangul_fsm;
pub mod jamo_table;
pub mod keymap;
pub mod segmenter;
pub mod unicode;
