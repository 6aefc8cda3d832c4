use crate::config::{CounterOptions, CounterType, EffectGroup, EffectPhase, TextOrient};
use crate::wizard::effects::Stage;
use crate::wizard::presenter::EffectTarget;

/// Rendered counter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub text: String,
    /// Display percentage, clamped to `0..=100`.
    pub percentage: u8,
    /// Text goes next to a progress bar instead of the counter slot.
    pub progressbar: bool,
    pub visible: bool,
    pub orient: TextOrient,
}

/// Step count used for progress math.
///
/// With the counter enabled, steps excluded by `startCount`/`finishCount`
/// are subtracted from the total.
pub fn functional_step_count(total: usize, options: &CounterOptions) -> usize {
    if !options.enable {
        return total;
    }
    let excluded = usize::from(!options.start_count) + usize::from(!options.finish_count);
    total.saturating_sub(excluded)
}

impl CounterView {
    pub fn compute(current: usize, total: usize, options: &CounterOptions) -> Self {
        let effective_count = functional_step_count(total, options) as i64;
        let effective_index = current as i64 - i64::from(!options.start_count);

        let raw = if effective_count <= 0 {
            0.0
        } else {
            effective_index as f64 / effective_count as f64 * 100.0
        };
        // Halves round up, matching how the percentage has always been shown.
        let percentage = (raw + 0.5).floor().clamp(0.0, 100.0) as u8;

        let mut text = match &options.counter_type {
            CounterType::Percentage => format!("{percentage}%"),
            CounterType::Count => format!(
                "{} of {}",
                effective_index.clamp(0, effective_count.max(0)),
                effective_count
            ),
            CounterType::Other(_) => "N/A".to_string(),
        };
        if !options.append_text.is_empty() {
            text.push(' ');
            text.push_str(&options.append_text);
        }

        let last = total.saturating_sub(1);
        let hidden =
            (options.start_hide && current == 0) || (options.finish_hide && current == last);

        Self {
            text,
            percentage,
            progressbar: options.progressbar,
            visible: !hidden,
            orient: options.orient_text,
        }
    }
}

#[derive(Debug)]
pub struct CounterSync {
    view: Option<CounterView>,
}

impl CounterSync {
    pub fn new() -> Self {
        Self { view: None }
    }

    /// Last computed view; `None` until the first refresh.
    pub fn view(&self) -> Option<&CounterView> {
        self.view.as_ref()
    }

    pub fn refresh(
        &mut self,
        stage: &mut Stage<'_>,
        current: usize,
        total: usize,
        options: &CounterOptions,
    ) {
        let view = CounterView::compute(current, total, options);
        stage.play(EffectGroup::Counter, EffectPhase::Change, EffectTarget::Counter);
        stage.presenter().render_counter(Some(&view));
        if view.progressbar {
            stage.presenter().render_progress(view.percentage);
        }
        self.view = Some(view);
    }
}

impl Default for CounterSync {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> CounterOptions {
        CounterOptions {
            enable: true,
            append_text: String::new(),
            ..CounterOptions::default()
        }
    }

    #[test]
    fn counts_every_step_by_default() {
        let view = CounterView::compute(2, 5, &counter());
        assert_eq!(view.text, "2 of 5");
        assert_eq!(view.percentage, 40);
        assert!(view.visible);
    }

    #[test]
    fn excluded_start_clamps_to_zero() {
        let options = CounterOptions {
            start_count: false,
            ..counter()
        };
        assert_eq!(functional_step_count(5, &options), 4);
        let view = CounterView::compute(0, 5, &options);
        assert_eq!(view.text, "0 of 4");
        assert_eq!(view.percentage, 0);
    }

    #[test]
    fn excluded_finish_overflows_to_full() {
        let options = CounterOptions {
            finish_count: false,
            counter_type: CounterType::Percentage,
            ..counter()
        };
        let view = CounterView::compute(4, 5, &options);
        assert_eq!(view.text, "100%");
        assert_eq!(view.percentage, 100);

        let count = CounterOptions {
            counter_type: CounterType::Count,
            ..options
        };
        assert_eq!(CounterView::compute(4, 5, &count).text, "4 of 4");
    }

    #[test]
    fn percentage_rounds_halves_up() {
        let options = CounterOptions {
            counter_type: CounterType::Percentage,
            ..counter()
        };
        // 1/8 = 12.5%
        assert_eq!(CounterView::compute(1, 8, &options).text, "13%");
        assert_eq!(CounterView::compute(1, 3, &options).text, "33%");
    }

    #[test]
    fn unknown_type_and_suffix() {
        let options = CounterOptions {
            counter_type: CounterType::Other("fraction".into()),
            append_text: "Complete".into(),
            ..counter()
        };
        assert_eq!(CounterView::compute(1, 3, &options).text, "N/A Complete");

        let count = CounterOptions {
            append_text: "done".into(),
            ..counter()
        };
        assert_eq!(CounterView::compute(1, 3, &count).text, "1 of 3 done");
    }

    #[test]
    fn zero_effective_count_reports_zero() {
        let options = CounterOptions {
            start_count: false,
            finish_count: false,
            counter_type: CounterType::Percentage,
            ..counter()
        };
        let view = CounterView::compute(0, 1, &options);
        assert_eq!(view.percentage, 0);
        assert_eq!(view.text, "0%");
    }

    #[test]
    fn hide_flags_apply_at_the_ends() {
        let options = CounterOptions {
            start_hide: true,
            finish_hide: true,
            ..counter()
        };
        assert!(!CounterView::compute(0, 3, &options).visible);
        assert!(CounterView::compute(1, 3, &options).visible);
        assert!(!CounterView::compute(2, 3, &options).visible);
    }

    #[test]
    fn disabled_counter_uses_total() {
        let options = CounterOptions {
            enable: false,
            start_count: false,
            ..CounterOptions::default()
        };
        assert_eq!(functional_step_count(5, &options), 5);
    }
}
