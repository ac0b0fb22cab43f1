// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The ESC/CSI/OSC byte-level state machine.
//!
//! ```text
//! GROUND ──ESC── ESC ──'['── CSI ──digit── CSI_PARM ──final(>=0x40)── GROUND
//!   │              │           │              │
//!   │              │           ├──intermediate(<0x30)── CSI_INT
//!   │              │           ├──';'── CSI_PARM
//!   │              │           ├──private(0x3C-0x3F, CSI only)── CSI_PARM
//!   │              │           └──':' or digit-after-intermediate── CSI_IGNORE
//!   │              ├──']'── OSC ──BEL / ESC '\' / C1 ST── GROUND
//!   │              └──final(>=0x30)── GROUND (dispatch ESC op)
//!   └── C0 control (except ESC itself) dispatches immediately and does NOT
//!       change `state` — a control byte arriving mid-CSI/ESC/OSC executes
//!       in place and parsing resumes where it left off, matching
//!       `TerminalEmulator_run`'s unconditional `if(ch < 0x20)` check before
//!       the state switch.
//! ```
//!
//! C1 controls (0x80..=0x9F) are recognized as their ESC-letter equivalents
//! only in `GROUND` state, and only when [`crate::utf8::Utf8Decoder`] has no
//! partial sequence in flight (the caller passes that as `utf8_pending` —
//! 0x80..=0x9F overlaps the UTF-8 continuation-byte range 0x80..=0xBF, so a
//! byte continuing an already-started multi-byte character must never be
//! reinterpreted as a C1 control; this reconciliation has no counterpart in
//! the literal source, which doesn't address 8-bit C1 vs. UTF-8 at all — see
//! `DESIGN.md`). Elsewhere C1-range bytes fall through the same
//! numeric-range rules CSI would apply to any other byte `>= 0x40`.

use smallvec::SmallVec;

use crate::constants::{C1_RANGE_END, C1_RANGE_START, MAX_PARAMS, OSC_BUF_MAX, PARAM_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Esc,
    Csi,
    CsiInt,
    CsiParm,
    CsiIgnore,
    Osc,
}

/// What a fed byte produced. `None` means "still accumulating, nothing to
/// dispatch yet."
#[derive(Debug, Clone, PartialEq)]
pub enum ParserEvent {
    None,
    /// A C0 control byte other than ESC (which the parser consumes
    /// internally as a state transition).
    C0(u8),
    /// A C1 control byte recognized in `GROUND` state.
    C1(u8),
    /// `ESC <intermediate bytes> <final>`.
    Esc { intermed: u16, final_byte: u8 },
    /// A complete CSI sequence.
    Csi { priv_marker: u8, intermed: u16, params: SmallVec<[u16; MAX_PARAMS]>, final_byte: u8 },
    /// A complete OSC string, terminated by BEL or ST.
    Osc { op: u16, text: Vec<u8> },
    /// A ground-state printable byte, to be run through the UTF-8 decoder.
    Print(u8),
}

/// Parser state: FSM position plus the in-progress CSI/OSC accumulators.
/// Persists across [`crate::parser::Parser::feed`] calls so a sequence split
/// across chunk boundaries parses correctly.
#[derive(Debug, Clone)]
pub struct Parser {
    state: State,
    priv_marker: u8,
    intermed: u16,
    params: SmallVec<[u16; MAX_PARAMS]>,
    param_ptr: usize,
    param_val: u16,
    osc_buf: Vec<u8>,
    osc_saw_esc: bool,
}

impl Default for Parser {
    fn default() -> Self { Self::new() }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            priv_marker: 0,
            intermed: 0,
            params: SmallVec::new(),
            param_ptr: 0,
            param_val: 0,
            osc_buf: Vec::new(),
            osc_saw_esc: false,
        }
    }

    /// Clear the CSI/ESC accumulators (`act_clear` in the original): called
    /// whenever a fresh ESC begins.
    fn clear(&mut self) {
        self.priv_marker = 0;
        self.intermed = 0;
        self.params.clear();
        self.param_ptr = 0;
        self.param_val = 0;
    }

    fn push_intermed(&mut self, ch: u8) {
        self.intermed = if self.intermed >= 0xFF00 { self.intermed } else { (self.intermed << 8) | u16::from(ch) };
    }

    fn push_param(&mut self) {
        if self.param_ptr < MAX_PARAMS {
            self.params.push(self.param_val);
            self.param_ptr += 1;
        }
        self.param_val = 0;
    }

    /// Feed one byte, returning whatever it completed (if anything).
    /// `utf8_pending` must reflect whether the caller's UTF-8 decoder has a
    /// multi-byte sequence in progress (see module docs).
    pub fn feed(&mut self, byte: u8, utf8_pending: bool) -> ParserEvent {
        // OSC accumulates raw bytes until its own terminator; C0 controls do
        // NOT interrupt an in-progress OSC string (BEL is the terminator,
        // not a "control byte executed in place", while inside one).
        if self.state == State::Osc {
            return self.feed_osc(byte);
        }

        if byte < 0x20 {
            return self.feed_c0(byte);
        }

        match self.state {
            State::Ground => {
                if !utf8_pending && (C1_RANGE_START..=C1_RANGE_END).contains(&byte) {
                    self.dispatch_c1(byte)
                } else {
                    ParserEvent::Print(byte)
                }
            }
            State::Esc => self.feed_esc(byte),
            State::Csi | State::CsiInt | State::CsiParm => self.feed_csi(byte),
            State::CsiIgnore => {
                if byte >= 0x40 {
                    self.state = State::Ground;
                }
                ParserEvent::None
            }
            State::Osc => unreachable!("handled above"),
        }
    }

    fn feed_c0(&mut self, byte: u8) -> ParserEvent {
        if byte == crate::constants::ESC {
            self.state = State::Esc;
            self.clear();
            return ParserEvent::None;
        }
        ParserEvent::C0(byte)
    }

    fn dispatch_c1(&mut self, byte: u8) -> ParserEvent {
        match byte {
            crate::constants::C1_CSI => {
                self.state = State::Csi;
                self.clear();
                ParserEvent::None
            }
            crate::constants::C1_OSC => {
                self.state = State::Osc;
                self.osc_buf.clear();
                self.osc_saw_esc = false;
                ParserEvent::None
            }
            _ => ParserEvent::C1(byte),
        }
    }

    fn feed_esc(&mut self, byte: u8) -> ParserEvent {
        if byte < 0x30 {
            self.push_intermed(byte);
            return ParserEvent::None;
        }
        self.state = State::Ground;
        if byte == b'[' {
            self.state = State::Csi;
            self.clear();
            return ParserEvent::None;
        }
        if byte == b']' {
            self.state = State::Osc;
            self.osc_buf.clear();
            self.osc_saw_esc = false;
            return ParserEvent::None;
        }
        let intermed = self.intermed;
        self.intermed = 0;
        ParserEvent::Esc { intermed, final_byte: byte }
    }

    fn feed_csi(&mut self, byte: u8) -> ParserEvent {
        if byte < 0x30 {
            self.push_intermed(byte);
            self.state = State::CsiInt;
            return ParserEvent::None;
        }
        if byte < 0x3A {
            // digit
            if self.state == State::CsiInt {
                self.state = State::CsiIgnore;
                return ParserEvent::None;
            }
            self.param_val = (self.param_val.saturating_mul(10) + u16::from(byte - b'0')).min(PARAM_MAX);
            self.state = State::CsiParm;
            return ParserEvent::None;
        }
        if byte == b':' {
            self.state = State::CsiIgnore;
            return ParserEvent::None;
        }
        if byte == b';' {
            if self.state == State::CsiInt {
                self.state = State::CsiIgnore;
                return ParserEvent::None;
            }
            self.push_param();
            self.state = State::CsiParm;
            return ParserEvent::None;
        }
        if byte < 0x40 {
            // private marker, e.g. '?', '<', '=', '>' — first byte only.
            if self.state != State::Csi {
                self.state = State::CsiIgnore;
                return ParserEvent::None;
            }
            self.priv_marker = byte;
            self.state = State::CsiParm;
            return ParserEvent::None;
        }

        // Final byte: dispatch.
        self.push_param();
        self.state = State::Ground;
        let event = ParserEvent::Csi {
            priv_marker: self.priv_marker,
            intermed: self.intermed,
            params: self.params.clone(),
            final_byte: byte,
        };
        self.clear();
        event
    }

    fn feed_osc(&mut self, byte: u8) -> ParserEvent {
        if byte == crate::constants::BEL || byte == crate::constants::C1_ST {
            return self.finish_osc();
        }
        if byte == crate::constants::ESC {
            self.osc_saw_esc = true;
            return ParserEvent::None;
        }
        if self.osc_saw_esc {
            self.osc_saw_esc = false;
            if byte == b'\\' {
                return self.finish_osc();
            }
            // Not a valid ST; fall through and keep accumulating both bytes
            // verbatim (lenient — never drop an in-progress OSC for this).
            if self.osc_buf.len() < OSC_BUF_MAX {
                self.osc_buf.push(crate::constants::ESC);
            }
        }
        if self.osc_buf.len() < OSC_BUF_MAX {
            self.osc_buf.push(byte);
        }
        ParserEvent::None
    }

    fn finish_osc(&mut self) -> ParserEvent {
        self.state = State::Ground;
        let mut split = self.osc_buf.splitn(2, |&b| b == b';');
        let op_bytes = split.next().unwrap_or(&[]);
        let op = std::str::from_utf8(op_bytes).ok().and_then(|s| s.parse::<u16>().ok()).unwrap_or(u16::MAX);
        let text = split.next().unwrap_or(&[]).to_vec();
        self.osc_buf.clear();
        ParserEvent::Osc { op, text }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn feed_all(parser: &mut Parser, bytes: &[u8]) -> Vec<ParserEvent> {
        bytes.iter().map(|&b| parser.feed(b, false)).filter(|e| *e != ParserEvent::None).collect()
    }

    #[test]
    fn ground_printable_byte_is_print_event() {
        let mut parser = Parser::new();
        assert_eq!(parser.feed(b'A', false), ParserEvent::Print(b'A'));
    }

    #[test]
    fn simple_csi_cup_parses_params_and_final() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, b"\x1b[2;5H");
        assert_eq!(
            events,
            vec![ParserEvent::Csi { priv_marker: 0, intermed: 0, params: SmallVec::from_slice(&[2, 5]), final_byte: b'H' }]
        );
    }

    #[test]
    fn private_marker_csi_parses() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, b"\x1b[?25h");
        assert_eq!(
            events,
            vec![ParserEvent::Csi { priv_marker: b'?', intermed: 0, params: SmallVec::from_slice(&[25]), final_byte: b'h' }]
        );
    }

    #[test]
    fn param_clamps_at_16383() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, b"\x1b[999999999m");
        assert_eq!(
            events,
            vec![ParserEvent::Csi { priv_marker: 0, intermed: 0, params: SmallVec::from_slice(&[16383]), final_byte: b'm' }]
        );
    }

    #[test]
    fn params_beyond_max_params_are_dropped() {
        let mut parser = Parser::new();
        let mut seq = Vec::from(&b"\x1b["[..]);
        for i in 0..(MAX_PARAMS + 5) {
            if i > 0 {
                seq.push(b';');
            }
            seq.extend_from_slice(b"1");
        }
        seq.push(b'm');
        let events = feed_all(&mut parser, &seq);
        if let ParserEvent::Csi { params, .. } = &events[0] {
            assert_eq!(params.len(), MAX_PARAMS);
        } else {
            panic!("expected a Csi event");
        }
    }

    #[test]
    fn colon_sends_sequence_to_ignore_state() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, b"\x1b[38:5:1mX");
        // The whole malformed CSI is swallowed; only the trailing 'X' prints.
        assert_eq!(events, vec![ParserEvent::Print(b'X')]);
    }

    #[test]
    fn digit_after_intermediate_is_invalid() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, b"\x1b[ 5t"); // ' ' intermediate, then digit
        assert_eq!(events, vec![]);
    }

    #[test]
    fn c1_csi_byte_starts_a_csi_sequence() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, &[0x9B, b'2', b'J']);
        assert_eq!(
            events,
            vec![ParserEvent::Csi { priv_marker: 0, intermed: 0, params: SmallVec::from_slice(&[2]), final_byte: b'J' }]
        );
    }

    #[test]
    fn c1_ind_byte_is_c1_event() {
        let mut parser = Parser::new();
        assert_eq!(parser.feed(crate::constants::C1_IND, false), ParserEvent::C1(crate::constants::C1_IND));
    }

    #[test]
    fn c1_range_byte_is_plain_print_when_utf8_is_pending() {
        let mut parser = Parser::new();
        // A continuation byte (e.g. 0x93, here standing in for one mid-sequence)
        // must reach the UTF-8 decoder, not be stolen as a C1 control.
        assert_eq!(parser.feed(0x93, true), ParserEvent::Print(0x93));
    }

    #[test]
    fn osc_terminated_by_bel_splits_op_and_text() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, b"\x1b]0;my title\x07");
        assert_eq!(events, vec![ParserEvent::Osc { op: 0, text: b"my title".to_vec() }]);
    }

    #[test]
    fn osc_terminated_by_st_splits_op_and_text() {
        let mut parser = Parser::new();
        let events = feed_all(&mut parser, b"\x1b]2;window\x1b\\");
        assert_eq!(events, vec![ParserEvent::Osc { op: 2, text: b"window".to_vec() }]);
    }

    #[test]
    fn osc_terminated_by_c1_st_splits_op_and_text() {
        let mut parser = Parser::new();
        let mut events = feed_all(&mut parser, b"\x1b]0;title");
        events.push(parser.feed(crate::constants::C1_ST, false));
        assert_eq!(events, vec![ParserEvent::Osc { op: 0, text: b"title".to_vec() }]);
    }

    #[test]
    fn c0_control_mid_csi_executes_without_disturbing_parse_state() {
        let mut parser = Parser::new();
        // A newline arrives mid-parameter list; the CSI continues after it.
        let events = feed_all(&mut parser, b"\x1b[1\n2H");
        assert_eq!(
            events,
            vec![
                ParserEvent::C0(b'\n'),
                ParserEvent::Csi { priv_marker: 0, intermed: 0, params: SmallVec::from_slice(&[12]), final_byte: b'H' },
            ]
        );
    }

    #[test]
    fn chunked_csi_parses_same_as_unchunked() {
        let mut parser_a = Parser::new();
        let events_a = feed_all(&mut parser_a, b"\x1b[3;4H");

        let mut parser_b = Parser::new();
        let mut events_b = feed_all(&mut parser_b, b"\x1b[3;");
        events_b.extend(feed_all(&mut parser_b, b"4H"));

        assert_eq!(events_a, events_b);
    }
}
