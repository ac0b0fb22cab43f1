// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC (operating system command) string dispatch: window/icon title.

use tracing::trace;

use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::utf8::Utf8Decoder;

impl<H: TerminalHost> Emulator<H> {
    /// OSC `0`/`2` (xterm: set icon name + window title / set window title
    /// only). OSC `1` (icon name only) is treated as an alias for `0` (spec
    /// §4.F/§6), so it sets the title too rather than being discarded.
    pub(crate) fn do_osc(&mut self, op: u16, text: &[u8]) {
        match op {
            0 | 1 | 2 => {
                let mut decoder = Utf8Decoder::new();
                let mut chars = decoder.decode(text);
                decoder.flush(&mut chars);
                let title: String = chars.into_iter().collect();
                self.host_mut().set_title(&title);
            }
            _ => trace!(op, "discarded unhandled OSC"),
        }
    }
}
