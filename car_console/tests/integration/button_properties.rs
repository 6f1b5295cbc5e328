//! Property tests for press classification.
//!
//! Times are multiples of 1/64 s so every comparison is exact.

use car_common::hal::driver::GpioDriver;
use car_common::io::role::InputLogic;
use car_console::button::TwoStateButton;
use car_hal::SimulationDriver;
use proptest::prelude::*;

const DT: f64 = 1.0 / 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Out {
    Short,
    Long,
    Pending,
}

fn button(interval_ticks: u32) -> TwoStateButton<Out> {
    let mut driver = SimulationDriver::new();
    let input = driver.open_input(4, InputLogic::ActiveLow).unwrap();
    TwoStateButton::with_interval(input, Out::Short, Out::Long, Out::Pending, interval_ticks as f64 * DT)
}

proptest! {
    #[test]
    fn hold_then_release(
        interval in 2u32..40,
        held in 1u32..200,
        start in 1u32..100_000,
    ) {
        let mut b = button(interval);
        let t0 = start as f64 * DT;

        let mut longs = 0;
        for k in 0..held {
            let out = b.classify(true, t0 + k as f64 * DT);
            if k > 0 && k % interval == 0 {
                prop_assert_eq!(out, Some(Out::Long));
                longs += 1;
            } else {
                prop_assert_eq!(out, Some(Out::Pending));
            }
        }
        prop_assert_eq!(longs, (held - 1) / interval);

        let release = b.classify(false, t0 + held as f64 * DT);
        if held <= interval {
            prop_assert_eq!(release, Some(Out::Short));
        } else {
            prop_assert_eq!(release, None);
        }
    }

    #[test]
    fn released_button_stays_quiet(
        interval in 2u32..40,
        idle in 1u32..200,
        start in 1u32..100_000,
    ) {
        let mut b = button(interval);
        let t0 = start as f64 * DT;
        for k in 0..idle {
            prop_assert_eq!(b.classify(false, t0 + k as f64 * DT), None);
        }
    }

    #[test]
    fn each_click_reports_exactly_one_short(
        interval in 2u32..40,
        clicks in proptest::collection::vec((1u32..40, 1u32..20), 1..10),
    ) {
        let mut b = button(interval);
        let mut tick = 64u32;
        let mut shorts = 0;
        let mut expected = 0;

        for (held, gap) in clicks {
            for _ in 0..held {
                prop_assert_ne!(b.classify(true, tick as f64 * DT), None);
                tick += 1;
            }
            if held <= interval {
                expected += 1;
            }
            for _ in 0..gap {
                if b.classify(false, tick as f64 * DT) == Some(Out::Short) {
                    shorts += 1;
                }
                tick += 1;
            }
        }
        prop_assert_eq!(shorts, expected);
    }
}
