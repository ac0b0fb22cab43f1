// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (`CSI Ps m`): the attribute/color-selection parameter list.

use tracing::trace;

use crate::cell::{CellAttrs, ColorSlot};
use crate::emulator::Emulator;
use crate::host::TerminalHost;

impl<H: TerminalHost> Emulator<H> {
    pub(crate) fn do_sgr(&mut self, params: &[u16]) {
        for &param in params {
            let attrs = &mut self.cursor_mut().attrs;
            apply_sgr_param(attrs, param);
        }
    }
}

fn apply_sgr_param(attrs: &mut CellAttrs, param: u16) {
    match param {
        0 => *attrs = CellAttrs::reset(),
        1 => attrs.bold = true,
        // 2 (faint/dim) has no counterpart in the original's tracked bits.
        3 => attrs.italic = true,
        4 | 21 => attrs.underline = true, // 21 (double underline) renders as single.
        5 | 6 => attrs.blink = true,      // 6 (rapid blink) is not distinguished.
        7 => attrs.reverse = true,
        // 8 (conceal) has no counterpart in the original's tracked bits.
        9 => attrs.strikethrough = true,
        22 => attrs.bold = false,
        23 => attrs.italic = false,
        24 => attrs.underline = false,
        25 => attrs.blink = false,
        27 => attrs.reverse = false,
        29 => attrs.strikethrough = false,
        30..=37 => attrs.fg = ColorSlot::Indexed((param - 30) as u8),
        // 38: extended (256-color/RGB) foreground — unimplemented, see `DESIGN.md`.
        39 => attrs.fg = ColorSlot::Default,
        40..=47 => attrs.bg = ColorSlot::Indexed((param - 40) as u8),
        // 48: extended background — unimplemented, see `DESIGN.md`.
        49 => attrs.bg = ColorSlot::Default,
        90..=97 => attrs.fg = ColorSlot::Indexed(8 + (param - 90) as u8),
        100..=107 => attrs.bg = ColorSlot::Indexed(8 + (param - 100) as u8),
        _ => trace!(param, "discarded unhandled SGR parameter"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_all_attrs() {
        let mut attrs = CellAttrs { bold: true, fg: ColorSlot::Indexed(1), ..Default::default() };
        apply_sgr_param(&mut attrs, 0);
        assert_eq!(attrs, CellAttrs::default());
    }

    #[test]
    fn bright_foreground_offsets_by_eight() {
        let mut attrs = CellAttrs::default();
        apply_sgr_param(&mut attrs, 91);
        assert_eq!(attrs.fg, ColorSlot::Indexed(9));
    }

    #[test]
    fn default_foreground_resets_only_fg() {
        let mut attrs = CellAttrs { fg: ColorSlot::Indexed(2), bold: true, ..Default::default() };
        apply_sgr_param(&mut attrs, 39);
        assert_eq!(attrs.fg, ColorSlot::Default);
        assert!(attrs.bold);
    }
}
