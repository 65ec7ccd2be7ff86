use std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct Chronometer {
    start: Instant,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> String {
        format_millis(self.start.elapsed().as_millis())
    }
}

impl Default for Chronometer {
    fn default() -> Self {
        Self::new()
    }
}

fn format_millis(elapsed: u128) -> String {
    format!("{:02}:{:02}.{:03}", elapsed / 60000, (elapsed % 60000) / 1000, elapsed % 1000)
}
