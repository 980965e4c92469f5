//! Signal classification.
//!
//! Pure display logic shared by the aggregate decision signal and every
//! per-agent sub-signal: a numeric signal maps to a category (buy, hold,
//! sell) and a signed two-decimal display string. Values outside [-1, 1]
//! are accepted and rendered as-is.

use crate::api::TradeAction;

/// Signal strength above which a value reads as buy pressure, below the
/// negation of which it reads as sell pressure. The boundaries themselves
/// fall to hold.
const ACTION_THRESHOLD: f64 = 0.2;

/// Display category for a signal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalCategory {
    Buy,
    Hold,
    Sell,
    /// Absent or non-numeric input.
    Neutral,
}

impl From<TradeAction> for SignalCategory {
    fn from(action: TradeAction) -> Self {
        match action {
            TradeAction::Buy => SignalCategory::Buy,
            TradeAction::Hold => SignalCategory::Hold,
            TradeAction::Sell => SignalCategory::Sell,
        }
    }
}

/// A signal value classified for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSignal {
    pub category: SignalCategory,
    pub display: String,
}

impl ClassifiedSignal {
    /// Classify a signal value. `None` and NaN are rendered as `--` with no
    /// category beyond neutral.
    pub fn from_value(value: Option<f64>) -> Self {
        let value = match value {
            Some(v) if !v.is_nan() => v,
            _ => {
                return Self {
                    category: SignalCategory::Neutral,
                    display: "--".to_string(),
                }
            }
        };

        let category = if value > ACTION_THRESHOLD {
            SignalCategory::Buy
        } else if value < -ACTION_THRESHOLD {
            SignalCategory::Sell
        } else {
            SignalCategory::Hold
        };

        // Strictly positive values carry an explicit sign; zero does not.
        let display = if value > 0.0 {
            format!("+{value:.2}")
        } else {
            format!("{value:.2}")
        };

        Self { category, display }
    }
}

/// Position of the signal bar indicator, in percent from the left edge.
/// -1 maps to 0, 0 to 50, +1 to 100; off-scale signals produce off-scale
/// positions.
pub fn bar_percent(signal: f64) -> f64 {
    (signal + 1.0) * 50.0
}
