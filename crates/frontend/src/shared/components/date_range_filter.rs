use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_core::date_filter::DateRange;

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Inclusive from/to date bounds for list views filtered by creation date.
/// Clearing an input unsets that bound; the button clears both.
#[component]
pub fn DateRangeFilter(
    #[prop(into)] range: Signal<DateRange>,

    /// Called with the edited range on every bound change.
    on_change: Callback<DateRange>,

    /// Called when the filter is cleared as a whole.
    on_clear: Callback<()>,
) -> impl IntoView {
    let on_start_change = move |ev| {
        let parsed = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
        let mut next = range.get_untracked();
        next.start = parsed;
        on_change.run(next);
    };

    let on_end_change = move |ev| {
        let parsed = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
        let mut next = range.get_untracked();
        next.end = parsed;
        on_change.run(next);
    };

    view! {
        <Flex class="date-range-filter" align=FlexAlign::Center gap=FlexGap::Small>
            <Label>"Filtrar por fecha:"</Label>
            <input
                type="date"
                class="date-range-filter__input"
                prop:value=move || date_value(range.get().start)
                on:input=on_start_change
            />
            <div>"—"</div>
            <input
                type="date"
                class="date-range-filter__input"
                prop:value=move || date_value(range.get().end)
                on:input=on_end_change
            />
            <Show when=move || range.get().is_active()>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_clear.run(())
                >
                    "Limpiar filtro"
                </Button>
            </Show>
        </Flex>
    }
}
