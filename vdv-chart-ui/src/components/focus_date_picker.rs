//! Focus date input for the multi-line chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FocusDatePickerProps {
    /// Current focus date (YYYY-MM-DD)
    pub value: String,
    /// Earliest selectable date
    #[props(default = String::new())]
    pub min: String,
    /// Latest selectable date
    #[props(default = String::new())]
    pub max: String,
    /// Called with the new date on change
    pub on_change: EventHandler<String>,
}

/// Date input that pins the per-country focus markers to one day.
#[component]
pub fn FocusDatePicker(props: FocusDatePickerProps) -> Element {
    let on_change = move |evt: Event<FormData>| {
        props.on_change.call(evt.value());
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Focus date: "
            input {
                r#type: "date",
                value: "{props.value}",
                min: "{props.min}",
                max: "{props.max}",
                onchange: on_change,
            }
        }
    }
}
