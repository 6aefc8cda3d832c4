use crate::config::{EffectGroup, EffectPhase};
use crate::wizard::effects::Stage;
use crate::wizard::presenter::EffectTarget;
use crate::wizard::step::StepRegistry;

/// Status of one menu entry relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Visited, before the current step; clickable.
    Active,
    Current,
    /// Not reached yet.
    Inactive,
}

impl EntryStatus {
    pub fn relative_to(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => EntryStatus::Active,
            std::cmp::Ordering::Equal => EntryStatus::Current,
            std::cmp::Ordering::Greater => EntryStatus::Inactive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub index: usize,
    pub title: String,
    pub status: EntryStatus,
}

/// One entry per registered step, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub entries: Vec<MenuEntry>,
}

impl MenuView {
    pub fn status(&self, index: usize) -> Option<EntryStatus> {
        self.entries.get(index).map(|e| e.status)
    }

    pub fn statuses(&self) -> Vec<EntryStatus> {
        self.entries.iter().map(|e| e.status).collect()
    }
}

#[derive(Debug)]
pub struct MenuSync {
    view: MenuView,
}

impl MenuSync {
    /// Entry 0 starts as current, the rest inactive.
    pub fn build(registry: &StepRegistry) -> Self {
        let entries = registry
            .iter()
            .enumerate()
            .map(|(index, step)| MenuEntry {
                index,
                title: step.title().to_string(),
                status: EntryStatus::relative_to(index, 0),
            })
            .collect();
        Self {
            view: MenuView { entries },
        }
    }

    pub fn view(&self) -> &MenuView {
        &self.view
    }

    pub fn refresh(&mut self, stage: &mut Stage<'_>, current: usize) {
        for entry in &mut self.view.entries {
            entry.status = EntryStatus::relative_to(entry.index, current);
        }
        stage.presenter().render_menu(Some(&self.view));
        stage.play(
            EffectGroup::Menu,
            EffectPhase::Change,
            EffectTarget::MenuEntry(current),
        );
    }

    /// Navigation target for a click on `index`; only visited entries navigate.
    pub fn click(&self, index: usize) -> Option<usize> {
        match self.view.status(index)? {
            EntryStatus::Active => Some(index),
            EntryStatus::Current | EntryStatus::Inactive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EffectsOptions;
    use crate::wizard::effects::EffectPlayer;
    use crate::wizard::presenter::{EffectRequest, Presenter};
    use crate::wizard::step::StepDefinition;
    use crate::wizard::sync::{ButtonsView, CounterView, TitleView};

    #[derive(Default)]
    struct Sink {
        menus: usize,
        effects: Vec<EffectRequest>,
    }

    impl Presenter for Sink {
        fn play_effect(&mut self, request: EffectRequest) {
            self.effects.push(request);
        }
        fn hide_other_steps(&mut self, _visible: usize) {}
        fn render_title(&mut self, _view: &TitleView) {}
        fn render_menu(&mut self, _view: Option<&MenuView>) {
            self.menus += 1;
        }
        fn render_counter(&mut self, _view: Option<&CounterView>) {}
        fn render_buttons(&mut self, _view: &ButtonsView) {}
        fn render_progress(&mut self, _percent: u8) {}
    }

    fn registry(n: usize) -> StepRegistry {
        StepRegistry::build(
            (0..n)
                .map(|i| StepDefinition::titled(format!("Step {i}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn built_menu_marks_first_entry_current() {
        let menu = MenuSync::build(&registry(3));
        assert_eq!(
            menu.view().statuses(),
            vec![
                EntryStatus::Current,
                EntryStatus::Inactive,
                EntryStatus::Inactive
            ]
        );
        assert_eq!(menu.view().entries[1].title, "Step 1");
    }

    #[test]
    fn statuses_follow_current_index() {
        let mut menu = MenuSync::build(&registry(4));
        let mut sink = Sink::default();
        let mut player = EffectPlayer::new();
        let effects = EffectsOptions::default();
        let mut stage = Stage::new(&mut sink, &mut player, &effects, false);

        menu.refresh(&mut stage, 2);

        assert_eq!(
            menu.view().statuses(),
            vec![
                EntryStatus::Active,
                EntryStatus::Active,
                EntryStatus::Current,
                EntryStatus::Inactive
            ]
        );
        assert_eq!(sink.menus, 1);
        assert_eq!(sink.effects[0].target, EffectTarget::MenuEntry(2));
    }

    #[test]
    fn only_visited_entries_are_clickable() {
        let mut menu = MenuSync::build(&registry(4));
        let mut sink = Sink::default();
        let mut player = EffectPlayer::new();
        let effects = EffectsOptions::default();
        menu.refresh(&mut Stage::new(&mut sink, &mut player, &effects, false), 2);

        assert_eq!(menu.click(0), Some(0));
        assert_eq!(menu.click(1), Some(1));
        assert_eq!(menu.click(2), None);
        assert_eq!(menu.click(3), None);
        assert_eq!(menu.click(9), None);
    }
}
