//! Unit tests for mts-core primitives.

#[cfg(test)]
mod ids {
    use crate::TrainId;

    #[test]
    fn index_roundtrip() {
        let id = TrainId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TrainId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TrainId(0) < TrainId(1));
        assert!(TrainId(100) > TrainId(99));
    }

    #[test]
    fn display_is_bare_number() {
        // The observation log prints "Train 7", so Display carries no prefix.
        assert_eq!(TrainId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod train {
    use crate::{Direction, Priority, TrainState};

    #[test]
    fn opposite_direction() {
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::East.to_string(), "East");
        assert_eq!(Direction::West.to_string(), "West");
    }

    #[test]
    fn high_outranks_low() {
        assert!(Priority::High > Priority::Low);
    }

    #[test]
    fn initial_state_is_loading() {
        assert_eq!(TrainState::default(), TrainState::Loading);
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{SimConfig, TimeUnits};

    #[test]
    fn to_duration_scales_by_unit() {
        let unit = Duration::from_millis(100);
        assert_eq!(TimeUnits(0).to_duration(unit), Duration::ZERO);
        assert_eq!(TimeUnits(6).to_duration(unit), Duration::from_millis(600));
    }

    #[test]
    fn default_config() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.unit, Duration::from_millis(100));
        assert_eq!(cfg.starvation_threshold, 4);
    }
}
