// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! DA: Device Attributes reply.

use crate::emulator::Emulator;
use crate::host::TerminalHost;

impl<H: TerminalHost> Emulator<H> {
    /// DA (`CSI c`): reply as a VT102 with AVO (identical to the original's
    /// hardcoded `"\e[?1;2c"`).
    pub(crate) fn do_da(&mut self) { self.host_mut().write_str(b"\x1b[?1;2c"); }
}
