mod common;

mod tests {
    use core::cell::Cell;

    use embassy_time::{Duration, Instant};
    use holly_jolly::{
        AnimationId, Animator, ButtonId, ButtonLatches, ButtonPanel, Command, Config, Edge,
        FrameBuffers, PollLoop,
    };

    use super::common::{MockPin, MockTransfer};

    const LEDS: usize = 8;

    type Loop<'a> = PollLoop<'a, MockTransfer, MockPin<'a>, MockPin<'a>, LEDS>;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn poll_loop<'a>(
        latches: &'a ButtonLatches,
        bright: &'a Cell<bool>,
        action: &'a Cell<bool>,
        config: &Config,
    ) -> Loop<'a> {
        let buffers = FrameBuffers::new(MockTransfer::default()).expect("mock engine prepares");
        let animator = Animator::new(buffers, config, at(0));
        let buttons = ButtonPanel::new(
            latches,
            MockPin::new(bright),
            MockPin::new(action),
            config.debounce,
        );
        PollLoop::new(animator, buttons, config)
    }

    #[test]
    fn test_buttons_are_bound_on_construction() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(false);
        let action = Cell::new(false);
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &Config::DEFAULT);

        let buttons = poll_loop.buttons_mut();
        assert_eq!(buttons.bright_mut().handler(), Some(Command::StepBrightness));
        assert_eq!(buttons.action_mut().handler(), Some(Command::CycleAnimation));
    }

    #[test]
    fn test_period_schedule() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(false);
        let action = Cell::new(false);
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &Config::DEFAULT);

        let result = poll_loop.tick(at(0));
        assert_eq!(result.next_deadline, at(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = poll_loop.tick(at(13));
        assert_eq!(result.next_deadline, at(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(7));

        // Slightly late: keep the schedule, no sleep
        let result = poll_loop.tick(at(35));
        assert_eq!(result.next_deadline, at(30));
        assert_eq!(result.sleep_duration, Duration::from_ticks(0));
    }

    #[test]
    fn test_drift_resets_schedule() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(false);
        let action = Cell::new(false);
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &Config::DEFAULT);

        poll_loop.tick(at(0));
        let result = poll_loop.tick(at(1_000));
        assert_eq!(result.next_deadline, at(1_010));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_tick_reports_published_frames() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(false);
        let action = Cell::new(false);
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &Config::DEFAULT);

        let pushed: Vec<_> = (0..=60_u64)
            .map(|step| poll_loop.tick(at(step * 10)).frame_pushed)
            .collect();
        // Idle starts after 500 ms, then every 100 ms
        let expected: Vec<_> = (0..=60_u64)
            .map(|step| step == 50 || step == 60)
            .collect();
        assert_eq!(pushed, expected);
    }

    #[test]
    fn test_action_press_cycles_animation() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(false);
        let action = Cell::new(false);
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &Config::DEFAULT);

        action.set(true);
        assert!(LATCHES.on_edge(ButtonId::Action, Edge::Falling, at(100)));

        poll_loop.tick(at(100));
        poll_loop.tick(at(140));
        assert_eq!(poll_loop.animator().active(), Some(AnimationId::Idle));

        poll_loop.tick(at(150));
        assert_eq!(poll_loop.animator().active(), Some(AnimationId::ColorSweep));
        assert!(!LATCHES.action.is_pending());

        // Held, no new edge: no second cycle
        poll_loop.tick(at(300));
        assert_eq!(poll_loop.animator().active(), Some(AnimationId::ColorSweep));
    }

    #[test]
    fn test_bounced_press_is_ignored() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(false);
        let action = Cell::new(false);
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &Config::DEFAULT);

        LATCHES.on_edge(ButtonId::Bright, Edge::Falling, at(0));
        poll_loop.tick(at(60));
        assert_eq!(poll_loop.animator().brightness().percent(), 20);
        assert!(!LATCHES.bright.is_pending());
    }

    #[test]
    fn test_both_buttons_in_one_tick() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(true);
        let action = Cell::new(true);
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &Config::DEFAULT);

        LATCHES.on_edge(ButtonId::Bright, Edge::Falling, at(0));
        LATCHES.on_edge(ButtonId::Action, Edge::Falling, at(0));
        poll_loop.tick(at(50));

        let animator = poll_loop.animator();
        assert_eq!(animator.brightness().percent(), 30);
        assert_eq!(animator.active(), Some(AnimationId::ColorSweep));
    }

    #[test]
    fn test_custom_debounce() {
        static LATCHES: ButtonLatches = ButtonLatches::new();
        let bright = Cell::new(true);
        let action = Cell::new(false);
        let config = Config::DEFAULT.with_debounce(Duration::from_millis(20));
        let mut poll_loop = poll_loop(&LATCHES, &bright, &action, &config);

        LATCHES.on_edge(ButtonId::Bright, Edge::Falling, at(0));
        poll_loop.tick(at(10));
        assert_eq!(poll_loop.animator().brightness().percent(), 20);
        poll_loop.tick(at(20));
        assert_eq!(poll_loop.animator().brightness().percent(), 30);
    }
}
