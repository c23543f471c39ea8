//! Menu and overlay visibility state.
//!
//! Two overlays (performance telemetry and controls help) each carry an
//! explicit enabled flag. Opening the menu forces both visible without
//! touching the flags; closing it restores whatever was explicitly enabled.

/// Menu/overlay visibility state machine.
#[derive(Clone, Copy, Debug)]
pub struct OverlayState {
    in_menu: bool,
    telemetry_enabled: bool,
    controls_enabled: bool,
}

impl OverlayState {
    /// Create with the startup visibility of each overlay.
    pub fn new(telemetry_enabled: bool, controls_enabled: bool) -> Self {
        Self {
            in_menu: false,
            telemetry_enabled,
            controls_enabled,
        }
    }

    /// Returns `true` while the menu is open. Camera look is suppressed then.
    pub fn in_menu(&self) -> bool {
        self.in_menu
    }

    /// Open or close the menu. Returns the new menu state.
    pub fn toggle_menu(&mut self) -> bool {
        self.in_menu = !self.in_menu;
        self.in_menu
    }

    /// Flip the telemetry overlay's explicit flag.
    pub fn toggle_telemetry(&mut self) {
        self.telemetry_enabled = !self.telemetry_enabled;
    }

    /// Flip the controls overlay's explicit flag.
    pub fn toggle_controls(&mut self) {
        self.controls_enabled = !self.controls_enabled;
    }

    /// Whether the telemetry overlay draws this frame.
    pub fn telemetry_visible(&self) -> bool {
        self.in_menu || self.telemetry_enabled
    }

    /// Whether the controls overlay draws this frame.
    pub fn controls_visible(&self) -> bool {
        self.in_menu || self.controls_enabled
    }
}
