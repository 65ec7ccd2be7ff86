use crate::Chronometer;
use std::fmt::Display;

#[derive(Clone, Copy, Debug)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled: true,
        }
    }

    pub fn silent() -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            println!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
