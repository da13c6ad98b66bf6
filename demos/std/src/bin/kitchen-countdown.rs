use countdown_timer::{CountdownTimer, impl_embassy_time::EmbassyTimeClock};
use embassy_executor::{Executor, Spawner};
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;

#[embassy_executor::task]
async fn main_task(_spawner: Spawner) {
    let mut countdown = CountdownTimer::new(EmbassyTimeClock, 10_000);
    countdown.start();
    println!("Counting down from 10 seconds");

    let mut ticker = Ticker::every(Duration::from_millis(50));
    loop {
        ticker.next().await;
        countdown.poll();

        if countdown.is_done() {
            println!("Done!");
            break;
        }
        if countdown.did_tick() {
            println!(
                "{:02}:{:02} left",
                countdown.minutes_remaining(),
                countdown.seconds_remaining_ceil(),
            );
        }
    }

    std::process::exit(0);
}

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

fn main() {
    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(main_task(spawner)).unwrap();
    });
}
