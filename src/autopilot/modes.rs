// src/autopilot/modes.rs

//! # Autopilot Modes
//!
//! Three independent on/off modes. Each [`ModeSwitch`] stores only its
//! current state and reports a [`Transition`] when a request changes it, so
//! entry and exit actions run exactly once per change.

/// One of the independent autopilot behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Hold the captured heading through bank and yaw.
    HeadingHold,
    /// Run the vertical cascade.
    VerticalHold,
    /// Within vertical hold, hold altitude rather than vertical speed.
    AltitudeHold,
}

/// State of a single mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeState {
    /// Not engaged.
    #[default]
    Off,
    /// Engaged.
    On,
}

/// Edge reported when a mode changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `Off` to `On`.
    Engaged,
    /// `On` to `Off`.
    Disengaged,
}

/// Edge-detecting on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeSwitch {
    state: ModeState,
}

impl ModeSwitch {
    /// Creates a switch in the `Off` state.
    pub const fn new() -> Self {
        Self {
            state: ModeState::Off,
        }
    }

    /// Requests the switch be on or off.
    /// Returns the transition if the state changed, `None` if it was already there.
    pub fn set(&mut self, active: bool) -> Option<Transition> {
        match (self.state, active) {
            (ModeState::Off, true) => {
                self.state = ModeState::On;
                Some(Transition::Engaged)
            }
            (ModeState::On, false) => {
                self.state = ModeState::Off;
                Some(Transition::Disengaged)
            }
            _ => None,
        }
    }

    /// Current state.
    pub fn state(&self) -> ModeState {
        self.state
    }

    /// Whether the switch is on.
    pub fn is_on(&self) -> bool {
        self.state == ModeState::On
    }
}

/// The three mode switches of an autopilot session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modes {
    heading_hold: ModeSwitch,
    vertical_hold: ModeSwitch,
    altitude_hold: ModeSwitch,
}

impl Modes {
    /// All modes off.
    pub const fn new() -> Self {
        Self {
            heading_hold: ModeSwitch::new(),
            vertical_hold: ModeSwitch::new(),
            altitude_hold: ModeSwitch::new(),
        }
    }

    /// Requests `mode` be on or off, returning the resulting transition.
    pub fn set(&mut self, mode: Mode, active: bool) -> Option<Transition> {
        self.switch_mut(mode).set(active)
    }

    /// Whether `mode` is on.
    pub fn is_active(&self, mode: Mode) -> bool {
        self.switch(mode).is_on()
    }

    /// The switch behind `mode`.
    pub fn switch(&self, mode: Mode) -> &ModeSwitch {
        match mode {
            Mode::HeadingHold => &self.heading_hold,
            Mode::VerticalHold => &self.vertical_hold,
            Mode::AltitudeHold => &self.altitude_hold,
        }
    }

    fn switch_mut(&mut self, mode: Mode) -> &mut ModeSwitch {
        match mode {
            Mode::HeadingHold => &mut self.heading_hold,
            Mode::VerticalHold => &mut self.vertical_hold,
            Mode::AltitudeHold => &mut self.altitude_hold,
        }
    }
}
