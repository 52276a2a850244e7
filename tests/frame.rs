mod common;

mod tests {
    use holly_jolly::{Bank, Color, FrameBuffers, InitError};

    use super::common::{MockTransfer, PrepareFailed};

    const LEDS: usize = 8;

    fn buffers() -> FrameBuffers<MockTransfer, LEDS> {
        FrameBuffers::new(MockTransfer::default()).expect("mock engine prepares")
    }

    #[test]
    fn test_new_prepares_and_pushes_blank_frame() {
        let buffers = buffers();
        let engine = buffers.engine();
        assert_eq!(engine.prepared_for, Some(LEDS));
        assert_eq!(engine.frames.len(), 1);
        assert_eq!(engine.last_frame(), &[Color::BLACK; LEDS]);
        assert_eq!(buffers.count(), LEDS);
    }

    #[test]
    fn test_new_surfaces_prepare_failure() {
        let result = FrameBuffers::<MockTransfer, LEDS>::new(MockTransfer::failing());
        assert!(matches!(result, Err(InitError::Transfer(PrepareFailed))));
    }

    #[test]
    fn test_new_rejects_empty_strip() {
        let result = FrameBuffers::<MockTransfer, 0>::new(MockTransfer::default());
        assert!(matches!(result, Err(InitError::EmptyStrip)));
    }

    #[test]
    fn test_swap_alternates_banks() {
        let mut buffers = buffers();
        for _ in 0..5 {
            let render_before = buffers.render_bank();
            buffers.swap();
            assert_eq!(buffers.display_bank(), render_before);
            assert_eq!(buffers.render_bank(), render_before.other());
        }
    }

    #[test]
    fn test_swap_publishes_render_content_without_copy() {
        let mut buffers = buffers();
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);

        buffers.render().fill(red);
        buffers.swap();
        assert_eq!(buffers.display(), &[red; LEDS]);
        assert_eq!(buffers.engine().last_frame(), &[red; LEDS]);

        // The new render bank still holds what was displayed before
        assert_eq!(buffers.render(), &[Color::BLACK; LEDS]);

        buffers.render().fill(blue);
        buffers.swap();
        assert_eq!(buffers.display(), &[blue; LEDS]);
        assert_eq!(buffers.render(), &[red; LEDS]);
    }

    #[test]
    fn test_swap_waits_for_running_transfer() {
        let mut buffers = buffers();
        assert!(buffers.engine().in_flight);
        let waits = buffers.engine().waits;

        buffers.swap();
        assert_eq!(buffers.engine().waits, waits + 1);
        assert!(buffers.engine().in_flight);
    }

    #[test]
    fn test_swap_without_drawing_resends_stale_frame() {
        let mut buffers = buffers();
        let green = Color::new(0, 255, 0);
        buffers.render().fill(green);
        buffers.swap();
        buffers.swap();
        buffers.swap();
        assert_eq!(buffers.engine().last_frame(), &[green; LEDS]);
    }

    #[test]
    fn test_reset_waits_then_zeroes_both_banks() {
        let mut buffers = buffers();
        buffers.render().fill(Color::new(1, 2, 3));
        buffers.swap();
        buffers.render().fill(Color::new(4, 5, 6));
        assert!(buffers.engine().in_flight);
        let waits = buffers.engine().waits;
        let transfers = buffers.engine().frames.len();

        buffers.reset();

        assert_eq!(buffers.engine().waits, waits + 1);
        assert!(!buffers.engine().in_flight);
        assert_eq!(buffers.engine().frames.len(), transfers);
        assert_eq!(buffers.display(), &[Color::BLACK; LEDS]);
        assert_eq!(buffers.render(), &[Color::BLACK; LEDS]);
    }

    #[test]
    fn test_clear_render_leaves_display_alone() {
        let mut buffers = buffers();
        let white = Color::new(255, 255, 255);
        buffers.render().fill(white);
        buffers.swap();
        buffers.render().fill(white);

        buffers.clear_render();
        assert_eq!(buffers.render(), &[Color::BLACK; LEDS]);
        assert_eq!(buffers.display(), &[white; LEDS]);
    }

    #[test]
    fn test_bank_other() {
        assert_eq!(Bank::First.other(), Bank::Second);
        assert_eq!(Bank::Second.other(), Bank::First);
    }
}
