mod tests {
    use holly_jolly::AnimationId;

    #[test]
    fn test_animation_id_index_matches_slot_order() {
        for (index, id) in AnimationId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), index);
        }
    }

    #[test]
    fn test_default_cadences() {
        assert_eq!(AnimationId::Idle.default_cadence().interval.as_millis(), 100);
        assert_eq!(AnimationId::ColorSweep.default_cadence().interval.as_millis(), 1000);
        assert_eq!(AnimationId::Twinkle.default_cadence().interval.as_millis(), 250);
        assert_eq!(AnimationId::SoftGlow.default_cadence().interval.as_millis(), 25);
        for id in AnimationId::ALL {
            assert_eq!(id.default_cadence().start_delay.as_millis(), 500);
        }
    }
}
