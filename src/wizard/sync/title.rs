use crate::config::{EffectGroup, EffectPhase};
use crate::wizard::effects::Stage;
use crate::wizard::presenter::{EffectTarget, Presenter};

/// Title bar contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleView {
    pub text: String,
    pub hidden: bool,
}

#[derive(Debug, Default)]
pub struct TitleSync {
    view: TitleView,
}

impl TitleSync {
    pub fn new(hidden: bool) -> Self {
        Self {
            view: TitleView {
                text: String::new(),
                hidden,
            },
        }
    }

    pub fn view(&self) -> &TitleView {
        &self.view
    }

    /// Swap in the title of the newly active step.
    ///
    /// Outside the initial activation the swap is wrapped in the title's
    /// hide and show effects.
    pub fn refresh(&mut self, stage: &mut Stage<'_>, title: &str) {
        let animated = !stage.is_initial();
        if animated {
            stage.play(EffectGroup::Title, EffectPhase::Hide, EffectTarget::Title);
        }

        self.view.text = title.to_string();
        stage.presenter().render_title(&self.view);

        if animated {
            stage.play(EffectGroup::Title, EffectPhase::Show, EffectTarget::Title);
        }
    }

    pub fn set_hidden(&mut self, presenter: &mut dyn Presenter, hidden: bool) {
        if self.view.hidden != hidden {
            self.view.hidden = hidden;
            presenter.render_title(&self.view);
        }
    }
}
