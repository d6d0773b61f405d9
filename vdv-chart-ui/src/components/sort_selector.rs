//! Sort criterion selector for the incremental bar chart.

use dioxus::prelude::*;
use vdv_viz::sort::SortCriterion;

#[derive(Props, Clone, PartialEq)]
pub struct SortSelectorProps {
    /// The currently selected criterion value ("original", "name-asc", ...)
    pub value: String,
    /// Called with the new criterion value on change
    pub on_change: EventHandler<String>,
}

/// Dropdown selector for the four bar-chart sort criteria.
#[component]
pub fn SortSelector(props: SortSelectorProps) -> Element {
    let current = props.value.clone();
    let on_change = move |evt: Event<FormData>| {
        props.on_change.call(evt.value());
    };

    let options = SortCriterion::all().map(|c| (c.value(), c.label(), current == c.value()));

    rsx! {
        label {
            style: "font-weight: bold;",
            "Sort by: "
            select {
                onchange: on_change,
                for (value, label, selected) in options {
                    option {
                        value: value,
                        selected: selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
