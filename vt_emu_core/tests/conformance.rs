// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conformance tests for the byte-stream → screen-state pipeline, organized
//! by scenario rather than by module (the per-module unit tests under
//! `src/` already cover individual operations in isolation).
//!
//! Each scenario here starts from a fresh `Emulator::new(24, 80, ...)` and
//! drives it with a realistic byte sequence, the same shape the teacher's
//! own `vt_100_ansi_conformance_tests` suite uses (one scenario per test,
//! full end-to-end byte-feed-then-assert, real terminal dimensions rather
//! than toy 3x3 buffers).

use pretty_assertions::assert_eq;
use vt_emu_core::host::NullHost;
use vt_emu_core::units::{col_index, row_index};
use vt_emu_core::Emulator;

fn emu() -> Emulator<NullHost> { Emulator::new(24, 80, NullHost::default()) }

fn row_text<H: vt_emu_core::TerminalHost>(e: &Emulator<H>, row: usize) -> String {
    e.screen().row(row_index(row)).cells().iter().map(|c| c.ch).collect()
}

#[test]
fn plain_text_advances_cursor_without_wrap() {
    let mut e = emu();
    e.feed(b"Hello");
    assert_eq!(&row_text(&e, 0)[0..5], "Hello");
    assert_eq!(e.cursor().row, row_index(0));
    assert_eq!(e.cursor().col, col_index(5));
    assert!(!e.cursor().wrapnext);
}

#[test]
fn sgr_red_applies_to_one_cell_and_resets_for_the_next() {
    let mut e = emu();
    e.feed(b"\x1b[31mA\x1b[0mB");
    let row = e.screen().row(row_index(0));
    assert!(row.cell(0).attrs.fg.is_custom());
    assert!(!row.cell(1).attrs.fg.is_custom());
}

#[test]
fn cup_places_cursor_at_one_based_row_and_column() {
    let mut e = emu();
    e.feed(b"\x1b[2;5HX");
    assert_eq!(e.screen().row(row_index(1)).cell(4).ch, 'X');
    assert_eq!(e.cursor().row, row_index(1));
    assert_eq!(e.cursor().col, col_index(5));
}

#[test]
fn filling_the_last_column_sets_wrapnext_then_wraps_on_next_write() {
    let mut e = Emulator::new(24, 80, NullHost::default());
    e.feed(&[b'.'; 80]);
    assert_eq!(e.cursor().row, row_index(0));
    assert_eq!(e.cursor().col, col_index(79));
    assert!(e.cursor().wrapnext);

    e.feed(b"!");
    assert!(e.screen().row(row_index(0)).is_wrapped());
    assert_eq!(e.cursor().row, row_index(1));
    assert_eq!(e.cursor().col, col_index(1));
    assert_eq!(e.screen().row(row_index(1)).cell(0).ch, '!');
}

#[test]
fn decstbm_sets_region_and_origin_mode_rebases_home() {
    let mut e = emu();
    e.feed(b"\x1b[5;10r\x1b[H");
    assert_eq!(e.scroll_region(), (row_index(4), row_index(9)));
    assert_eq!(e.cursor().row, row_index(0));
    assert_eq!(e.cursor().col, col_index(0));

    e.feed(b"\x1b[?6h\x1b[H");
    assert_eq!(e.cursor().row, row_index(4));
    assert_eq!(e.cursor().col, col_index(0));
}

#[test]
fn utf8_and_malformed_lead_byte_both_decode_correctly() {
    let mut valid = emu();
    valid.feed(&[0xC3, 0xA9]);
    assert_eq!(valid.screen().row(row_index(0)).cell(0).ch, '\u{00E9}');

    let mut invalid = emu();
    invalid.feed(&[0xC3, b'Z']);
    assert_eq!(invalid.screen().row(row_index(0)).cell(0).ch, '\u{00C3}');
    assert_eq!(invalid.screen().row(row_index(0)).cell(1).ch, 'Z');
}

#[test]
fn splitting_a_byte_stream_across_feed_calls_matches_one_call() {
    let bytes = b"\x1b[31mHello\x1b[0m World\r\n\x1b[2;10HX";

    let mut whole = emu();
    whole.feed(bytes);

    let mut chunked = emu();
    for chunk in bytes.chunks(3) {
        chunked.feed(chunk);
    }

    assert_eq!(row_text(&whole, 0), row_text(&chunked, 0));
    assert_eq!(row_text(&whole, 1), row_text(&chunked, 1));
    assert_eq!(whole.cursor().row, chunked.cursor().row);
    assert_eq!(whole.cursor().col, chunked.cursor().col);
}

#[test]
fn a_chunked_utf8_sequence_matches_an_unchunked_one() {
    // 0xF0 0x9F 0x98 0x80 = U+1F600, split mid-sequence across two feeds.
    let mut a = emu();
    a.feed(&[0xF0, 0x9F, 0x98, 0x80]);

    let mut b = emu();
    b.feed(&[0xF0, 0x9F]);
    b.feed(&[0x98, 0x80]);

    assert_eq!(a.screen().row(row_index(0)).cell(0).ch, b.screen().row(row_index(0)).cell(0).ch);
    assert_eq!(a.screen().row(row_index(0)).cell(0).ch, '\u{1F600}');
}

#[test]
fn omitted_zero_and_explicit_one_parameter_are_equivalent() {
    let mut omitted = emu();
    omitted.feed(b"\x1b[10;10H\x1b[A"); // CUU with no parameter

    let mut zero = emu();
    zero.feed(b"\x1b[10;10H\x1b[0A"); // CUU Ps=0

    let mut one = emu();
    one.feed(b"\x1b[10;10H\x1b[1A"); // CUU Ps=1

    assert_eq!(omitted.cursor().row, zero.cursor().row);
    assert_eq!(zero.cursor().row, one.cursor().row);
    assert_eq!(one.cursor().row, row_index(8));
}

#[test]
fn decsc_decrc_round_trips_position_and_attrs() {
    let mut e = emu();
    e.feed(b"\x1b[12;40m\x1b[12;40H\x1b7"); // move + (invalid SGR, ignored) + save
    let saved_row = e.cursor().row;
    let saved_col = e.cursor().col;
    let saved_attrs = e.cursor().attrs;

    e.feed(b"\x1b[1;1H\x1b[31m"); // move elsewhere and change attrs
    e.feed(b"\x1b8"); // restore

    assert_eq!(e.cursor().row, saved_row);
    assert_eq!(e.cursor().col, saved_col);
    assert_eq!(e.cursor().attrs, saved_attrs);
}

#[test]
fn insert_mode_shifts_existing_text_right_instead_of_overwriting() {
    let mut e = emu();
    e.feed(b"ABCDE\x1b[1;2H\x1b[4h"); // IRM on, cursor before 'B'
    e.feed(b"X");
    assert_eq!(&row_text(&e, 0)[0..6], "AXBCDE");
}

#[test]
fn device_attributes_reply_is_written_back_through_the_host() {
    let mut e = emu();
    e.feed(b"\x1b[c");
    assert_eq!(e.host().written, b"\x1b[?1;2c");
}

#[test]
fn osc_0_sets_the_window_title_via_the_host_callback() {
    let mut e = emu();
    e.feed(b"\x1b]0;my session\x07");
    assert_eq!(e.host().title.as_deref(), Some("my session"));
}

#[test]
fn resize_preserves_overlapping_content_and_clamps_scroll_region() {
    let mut e = emu();
    e.feed(b"\x1b[5;20r"); // scroll region rows 5..=20
    e.resize(10, 80).unwrap();
    assert_eq!(e.scroll_region(), (row_index(4), row_index(9)));
}
