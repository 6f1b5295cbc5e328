use crate::component::{Component, ComponentKind};
use car_common::hal::port::OutputHandle;

/// Ignition circuit: lights its indicator as soon as the loop runs.
pub struct Battery {
    led: OutputHandle,
}

impl Battery {
    pub fn new(mut led: OutputHandle) -> Self {
        led.set(false);
        Self { led }
    }
}

impl Component for Battery {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Battery
    }

    fn step(&mut self, _now: f64) {
        self.led.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::AudioRequest;
    use crate::components::test_support::Rig;

    #[test]
    fn indicator_lights_on_first_tick() {
        let mut rig = Rig::new();
        let mut battery = Battery::new(rig.output(23));
        assert_eq!(rig.board.output(23), Some(false));

        battery.step(1.0);
        assert_eq!(rig.board.output(23), Some(true));
        assert_eq!(battery.audio(), AudioRequest::NONE);
    }
}
