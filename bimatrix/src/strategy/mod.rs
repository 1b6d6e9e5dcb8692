mod mixed_strategy;

pub use self::mixed_strategy::MixedStrategy;
