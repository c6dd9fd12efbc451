use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::validation::{FieldFeedback, FieldRules};

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
    /// Changes whenever the owning form is reset.
    #[prop_or_default]
    pub reset_epoch: u32,
}

fn event_value(e: &FocusEvent) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
        .unwrap_or_default()
}

/// Input or textarea with blur/focus border feedback and an inline email
/// message rendered directly after the field.
#[function_component(ValidatedField)]
pub fn validated_field(props: &FieldProps) -> Html {
    let feedback = use_state_eq(FieldFeedback::default);
    let rules = FieldRules {
        required: props.required,
        email: &*props.input_type == "email",
    };

    {
        let feedback = feedback.clone();
        use_effect_with_deps(
            move |_| {
                feedback.set(FieldFeedback::default());
                || ()
            },
            props.reset_epoch,
        );
    }

    let onblur = {
        let feedback = feedback.clone();
        Callback::from(move |e: FocusEvent| {
            let mut next = *feedback;
            next.blur(rules, &event_value(&e));
            feedback.set(next);
        })
    };

    let onfocus = {
        let feedback = feedback.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = *feedback;
            next.focus(rules);
            feedback.set(next);
        })
    };

    let style = feedback.style();
    let id = format!("field-{}", &*props.name);

    html! {
        <div class="form-group">
            <label for={id.clone()}>{ props.label.to_string() }</label>
            {
                if props.multiline {
                    html! {
                        <textarea
                            id={id}
                            name={props.name.clone()}
                            rows="5"
                            placeholder={props.placeholder.clone()}
                            required={props.required}
                            style={style}
                            onblur={onblur}
                            onfocus={onfocus}
                        />
                    }
                } else {
                    html! {
                        <input
                            id={id}
                            type={props.input_type.clone()}
                            name={props.name.clone()}
                            placeholder={props.placeholder.clone()}
                            required={props.required}
                            style={style}
                            onblur={onblur}
                            onfocus={onfocus}
                        />
                    }
                }
            }
            {
                if let Some(message) = feedback.message {
                    html! { <div class="validation-error">{ message }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
