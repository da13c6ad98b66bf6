use embassy_stm32::{
    pac::timer::vals::Urs,
    timer::{GeneralInstance32bit4Channel, low_level::Timer},
};

/// [`Clock`] over a 32-bit STM32 general-purpose timer (TIM2/TIM5 class).
///
/// The timer is turned into a free-running counter with the full 32-bit
/// reload value, so its CNT register is the wrapping millisecond counter
/// itself. The caller must configure a 1 kHz tick rate first, e.g. with
/// `timer.set_tick_freq(khz(1))`.
pub struct Stm32MillisClock<'a, T: GeneralInstance32bit4Channel>(Timer<'a, T>);

impl<'a, T: GeneralInstance32bit4Channel> Stm32MillisClock<'a, T> {
    pub fn new(timer: Timer<'a, T>) -> Self {
        critical_section::with(|_| {
            timer.regs_gp32().cr1().modify(|reg| {
                reg.set_urs(Urs::COUNTER_ONLY);
                reg.set_opm(false);
                reg.set_udis(false);
            });

            timer.regs_gp32().arr().write(|reg| reg.set_arr(u32::MAX));
            // Generate an Update Request
            timer.regs_gp32().egr().write(|r| r.set_ug(true));
            timer.regs_gp32().sr().modify(|reg| reg.set_uif(false));

            Timer::reset(&timer);
            Timer::start(&timer);
        });

        Self(timer)
    }
}

impl<'a, T: GeneralInstance32bit4Channel> crate::Clock for Stm32MillisClock<'a, T> {
    fn now_ms(&mut self) -> u32 {
        self.0.regs_gp32().cnt().read().cnt()
    }
}
