//! Add/Remove buttons for the incremental bar chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AddRemoveControlsProps {
    /// How many dataset records are still unrevealed
    pub remaining: usize,
    /// Whether the working set has anything left to remove
    pub can_remove: bool,
    /// Called when the Add button is clicked
    pub on_add: EventHandler<()>,
    /// Called when the Remove button is clicked
    pub on_remove: EventHandler<()>,
}

const BUTTON_STYLE: &str = "padding: 4px 14px; border: 1px solid #90A4AE; border-radius: 4px; background: #ECEFF1; cursor: pointer;";

/// The two reveal/hide buttons. Out-of-range clicks are no-ops in the
/// controller; the buttons are also disabled for clarity.
#[component]
pub fn AddRemoveControls(props: AddRemoveControlsProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            button {
                style: BUTTON_STYLE,
                disabled: props.remaining == 0,
                onclick: move |_| props.on_add.call(()),
                "Add province"
            }
            button {
                style: BUTTON_STYLE,
                disabled: !props.can_remove,
                onclick: move |_| props.on_remove.call(()),
                "Remove last"
            }
            span {
                style: "font-size: 12px; color: #666;",
                "{props.remaining} not yet shown"
            }
        }
    }
}
