#![no_std]
#![no_main]

use countdown_timer::{CountdownTimer, impl_embassy_stm32::Stm32MillisClock};
use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::{exti::ExtiInput, time::khz};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let mut button = ExtiInput::new(p.PC13, p.EXTI13, embassy_stm32::gpio::Pull::Down);
    let mut tim = embassy_stm32::timer::low_level::Timer::new(p.TIM2);
    tim.set_tick_freq(khz(1));

    let mut countdown = CountdownTimer::new(Stm32MillisClock::new(tim), 90_000);

    info!("Press the button to start the 90 second countdown");
    button.wait_for_rising_edge().await;
    countdown.start();

    loop {
        embassy_time::Timer::after_millis(25).await;
        countdown.poll();

        if countdown.did_tick() {
            info!(
                "{=u32:02}:{=u32:02} left",
                countdown.minutes_remaining(),
                countdown.seconds_remaining_ceil()
            );
        }
        if countdown.is_done() {
            info!("Time is up, press the button to go again");
            countdown.reset();
            button.wait_for_rising_edge().await;
            countdown.start();
        }
    }
}
