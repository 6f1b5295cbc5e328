//! Assembles the console from configured ports.

use crate::audio::AudioOutput;
use crate::car::Car;
use crate::component::ComponentKind;
use crate::components::{Battery, EmergencyLight, Engine, Horn, Radio, TurnSignal};
use crate::keyboard::RadioKeyboard;
use crate::media::MediaSubsystem;
use car_common::hal::driver::HalError;
use car_common::io::role::IoRole;
use car_hal::HalCore;
use tracing::info;

/// Build the car with every component wired through `hal`, registered in
/// [`REGISTRATION_ORDER`](crate::component::REGISTRATION_ORDER).
pub fn build_car<M>(
    hal: &mut HalCore,
    media: M,
    audio: Box<dyn AudioOutput>,
    frequency_hz: u32,
) -> Result<Car, HalError>
where
    M: MediaSubsystem + 'static,
{
    let mut car = Car::new(audio, frequency_hz);
    let emergency = hal.input(IoRole::EmergencyButton)?;

    car.add(Box::new(Battery::new(hal.output(IoRole::EngineRunnableLed)?)));

    let gears = [
        hal.input(IoRole::GearButton(1))?,
        hal.input(IoRole::GearButton(2))?,
        hal.input(IoRole::GearButton(3))?,
        hal.input(IoRole::GearButton(4))?,
        hal.input(IoRole::GearButton(5))?,
        hal.input(IoRole::GearButtonR)?,
    ];
    car.add(Box::new(Engine::new(
        hal.input(IoRole::StarterButton)?,
        hal.output(IoRole::EngineRunningLed)?,
        gears,
    )));

    car.add(Box::new(TurnSignal::new(
        ComponentKind::TurnSignalLeft,
        hal.input(IoRole::TurnSignalLeftButton)?,
        emergency.clone(),
        hal.output(IoRole::TurnSignalLeftLed)?,
    )));
    car.add(Box::new(TurnSignal::new(
        ComponentKind::TurnSignalRight,
        hal.input(IoRole::TurnSignalRightButton)?,
        emergency,
        hal.output(IoRole::TurnSignalRightLed)?,
    )));
    car.add(Box::new(EmergencyLight::new(
        hal.input(IoRole::EmergencyLightButton)?,
        hal.output(IoRole::EmergencyLightRelay)?,
    )));

    let keyboard = RadioKeyboard::new(
        hal.input(IoRole::MusicBackButton)?,
        hal.input(IoRole::MusicPlayButton)?,
        hal.input(IoRole::MusicForwardButton)?,
    );
    car.add(Box::new(Radio::new(media, keyboard)));
    car.add(Box::new(Horn::new(hal.input(IoRole::HornButton)?)));

    info!("Car assembled on driver '{}'", hal.driver_name());
    Ok(car)
}
