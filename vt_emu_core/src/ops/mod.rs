// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operation dispatcher: one module per operation family, each adding
//! `impl<H: TerminalHost> Emulator<H>` methods the `emulator` module's
//! `dispatch_*` routers call into. Mirrors the original's `do_*` naming.

pub mod cursor_ops;
pub mod edit_ops;
pub mod erase_ops;
pub mod esc_ops;
pub mod margin_ops;
pub mod mode_ops;
pub mod osc_ops;
pub mod reply_ops;
pub mod sgr_ops;
pub mod tab_ops;
pub mod window_ops;

/// `GETARG`/`DEFAULT`: parameter `idx`, or `default` if absent or given as
/// literal `0` (ECMA-48 convention: `0` means "use the default", so a CSI
/// sequence can never explicitly request numeric zero through this path).
#[must_use]
pub(crate) fn get_arg(params: &[u16], idx: usize, default: u16) -> u16 {
    let value = params.get(idx).copied().unwrap_or(0);
    if value == 0 { default } else { value }
}

/// Convert a 1-based CSI row/column parameter (defaulted via [`get_arg`])
/// into a 0-based index, saturating rather than underflowing if a
/// pathological `0`-after-default case ever reached here.
#[must_use]
pub(crate) fn csi_param_to_index(params: &[u16], idx: usize, default: u16) -> usize {
    get_arg(params, idx, default).saturating_sub(1) as usize
}
