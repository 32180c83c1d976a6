use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Success,
    Error,
}

impl CardTone {
    fn class(self) -> &'static str {
        match self {
            CardTone::Neutral => "stat-card",
            CardTone::Success => "stat-card stat-card--success",
            CardTone::Error => "stat-card stat-card--error",
        }
    }

    fn card_class(self, stale: bool) -> String {
        if stale {
            format!("{} stat-card--stale", self.class())
        } else {
            self.class().to_string()
        }
    }
}

/// Single headline counter.
///
/// `stale` is set while the latest load has failed. The value shown is then
/// either the zero fallback or the last successfully loaded figure.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<u64>,
    #[prop(optional)]
    tone: CardTone,
    #[prop(into, optional)]
    stale: Signal<bool>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Option<String>,
) -> impl IntoView {
    let class = move || tone.card_class(stale.get());

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_count(value.get())}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_class_is_added_to_tone() {
        assert_eq!(CardTone::Neutral.card_class(false), "stat-card");
        assert_eq!(
            CardTone::Error.card_class(true),
            "stat-card stat-card--error stat-card--stale"
        );
    }
}
