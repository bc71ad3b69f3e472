//! Controls attached to a [`Binding`]
//!
//! Each component runs one effect for state -> control and one event
//! listener for control -> state. Both belong to the component's owner and
//! go away when it unmounts.

use leptos::html;
use leptos::prelude::*;

use crate::shared::remote_state::{Binding, ControlKind, FieldValue, RawControl, RawDisplay};

/// Handle to a mounted control, used to reset it after a rollback.
/// Once the control is gone, resets do nothing.
#[derive(Clone, Copy)]
pub enum ControlRef {
    Input(ControlKind, NodeRef<html::Input>),
    Select(ControlKind, NodeRef<html::Select>),
    TextArea(ControlKind, NodeRef<html::Textarea>),
}

impl ControlRef {
    pub fn input(kind: ControlKind) -> Self {
        ControlRef::Input(kind, NodeRef::new())
    }

    pub fn select() -> Self {
        ControlRef::Select(ControlKind::EnumInteger, NodeRef::new())
    }

    pub fn textarea() -> Self {
        ControlRef::TextArea(ControlKind::Text, NodeRef::new())
    }

    pub fn input_ref(&self) -> NodeRef<html::Input> {
        match self {
            ControlRef::Input(_, r) => *r,
            _ => NodeRef::new(),
        }
    }

    pub fn select_ref(&self) -> NodeRef<html::Select> {
        match self {
            ControlRef::Select(_, r) => *r,
            _ => NodeRef::new(),
        }
    }

    pub fn textarea_ref(&self) -> NodeRef<html::Textarea> {
        match self {
            ControlRef::TextArea(_, r) => *r,
            _ => NodeRef::new(),
        }
    }

    fn kind(&self) -> ControlKind {
        match self {
            ControlRef::Input(kind, _) | ControlRef::Select(kind, _) | ControlRef::TextArea(kind, _) => *kind,
        }
    }

    pub fn show_raw(&self, raw: &RawControl) {
        match self {
            ControlRef::Input(_, r) => {
                if let Some(el) = r.try_get_untracked().flatten() {
                    write_input(&el, raw);
                }
            }
            ControlRef::Select(_, r) => {
                if let (Some(el), RawControl::Text(value)) = (r.try_get_untracked().flatten(), raw) {
                    el.set_value(value);
                }
            }
            ControlRef::TextArea(_, r) => {
                if let (Some(el), RawControl::Text(value)) = (r.try_get_untracked().flatten(), raw) {
                    el.set_value(value);
                }
            }
        }
    }
}

impl RawDisplay for ControlRef {
    fn show(&self, value: &FieldValue) {
        self.show_raw(&self.kind().render(value));
    }
}

fn write_input(el: &web_sys::HtmlInputElement, raw: &RawControl) {
    match raw {
        RawControl::Text(value) => {
            if el.value() != *value {
                el.set_value(value);
            }
        }
        RawControl::Checked(checked) => el.set_checked(*checked),
    }
}

/// Text or integer input
#[component]
pub fn BoundInput(
    binding: Binding,
    #[prop(optional)] node_ref: Option<NodeRef<html::Input>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_default();
    let numeric = matches!(binding.kind(), ControlKind::Integer | ControlKind::EnumInteger);

    let render = binding.clone();
    Effect::new(move |_| {
        let raw = render.rendered();
        if let Some(el) = node_ref.get() {
            write_input(&el, &raw);
        }
    });

    view! {
        <input
            node_ref=node_ref
            type="text"
            inputmode=if numeric { "numeric" } else { "text" }
            class=move || format!("form__input {}", class.get().unwrap_or_default())
            placeholder=move || placeholder.get().unwrap_or_default()
            on:change=move |ev| {
                let raw = RawControl::Text(event_target_value(&ev));
                if let Some(clean) = binding.apply_input(&raw) {
                    if let Some(el) = node_ref.get_untracked() {
                        el.set_value(&clean);
                    }
                }
            }
        />
    }
}

/// `<select>` over integer-backed options
#[component]
pub fn BoundSelect(
    binding: Binding,
    options: Vec<(i64, String)>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Select>>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_default();

    let render = binding.clone();
    Effect::new(move |_| {
        if let (RawControl::Text(value), Some(el)) = (render.rendered(), node_ref.get()) {
            el.set_value(&value);
        }
    });

    view! {
        <select
            node_ref=node_ref
            class=move || format!("form__select {}", class.get().unwrap_or_default())
            on:change=move |ev| {
                binding.apply_input(&RawControl::Text(event_target_value(&ev)));
            }
        >
            {options
                .into_iter()
                .map(|(value, label)| view! { <option value=value.to_string()>{label}</option> })
                .collect_view()}
        </select>
    }
}

/// Checkbox styled as a toggle
#[component]
pub fn BoundSwitch(
    binding: Binding,
    #[prop(optional)] node_ref: Option<NodeRef<html::Input>>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_default();

    let render = binding.clone();
    Effect::new(move |_| {
        let raw = render.rendered();
        if let Some(el) = node_ref.get() {
            write_input(&el, &raw);
        }
    });

    view! {
        <input
            node_ref=node_ref
            type="checkbox"
            class=move || format!("toggle {}", class.get().unwrap_or_default())
            on:change=move |ev| {
                binding.apply_input(&RawControl::Checked(event_target_checked(&ev)));
            }
        />
    }
}

#[component]
pub fn BoundTextArea(
    binding: Binding,
    #[prop(optional)] node_ref: Option<NodeRef<html::Textarea>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_default();

    let render = binding.clone();
    Effect::new(move |_| {
        if let (RawControl::Text(value), Some(el)) = (render.rendered(), node_ref.get()) {
            if el.value() != value {
                el.set_value(&value);
            }
        }
    });

    view! {
        <textarea
            node_ref=node_ref
            class=move || format!("form__textarea {}", class.get().unwrap_or_default())
            placeholder=move || placeholder.get().unwrap_or_default()
            on:change=move |ev| {
                binding.apply_input(&RawControl::Text(event_target_value(&ev)));
            }
        ></textarea>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_control_ignores_reset() {
        let owner = Owner::new();
        let control = owner.with(|| ControlRef::input(ControlKind::Integer));
        drop(owner);
        control.show(&FieldValue::Int(5));
        control.show_raw(&RawControl::Checked(true));
    }
}
