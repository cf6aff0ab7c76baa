pub mod advisor;
pub mod classifier;
pub mod engine;
pub mod explain;
pub mod normalize;
pub mod presets;
pub mod scoring;
pub mod types;
pub mod volatility;

pub use engine::{evaluate, Evaluator};
pub use normalize::FormInputs;
pub use presets::Preset;
pub use types::{Advice, Inputs, Side, StrategyName, StrategyResult, StrikeGuide, Trend};
pub use volatility::VolatilitySource;
